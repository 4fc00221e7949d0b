mod common;

pub(crate) use common::{day, mk_run};
