pub(crate) mod customer_form;
pub(crate) mod detail_modal;
pub(crate) mod guard;
pub(crate) mod login;
pub(crate) mod pagination;
pub(crate) mod placeholder;
pub(crate) mod record_table;
pub(crate) mod shell;
pub(crate) mod toast;
