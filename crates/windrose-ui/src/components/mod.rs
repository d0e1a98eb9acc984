pub(crate) mod dialog;
pub(crate) mod home;
pub(crate) mod listing;
pub(crate) mod settings;
pub(crate) mod shell;
pub(crate) mod toggle;
