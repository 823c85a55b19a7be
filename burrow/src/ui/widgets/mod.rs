pub(crate) mod records_table;
pub(crate) mod status_line;
