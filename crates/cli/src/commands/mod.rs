pub(crate) mod history;
pub(crate) mod info;
pub(crate) mod run;
pub(crate) mod status;
