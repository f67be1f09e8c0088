mod records;

pub(crate) use records::Records;
