mod bitstring;
mod check_status;
mod error;
mod status_list_subject;

pub use crate::{
    bitstring::Bitstring,
    check_status::{check_status, find_status_list_subject},
    error::Error,
    status_list_subject::{StatusListSubject, StatusPurposes},
};
pub type Result<T> = std::result::Result<T, Error>;
