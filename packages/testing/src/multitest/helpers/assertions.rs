use std::fmt::{Debug, Display};

use anyhow::Result as AnyResult;

/// Downcasts the error of a multi-test execution into the contract error `E` and compares it.
pub fn assert_err<T, E>(res: AnyResult<T>, err: E)
where
    E: Display + Debug + PartialEq + Send + Sync + 'static,
{
    match res {
        Ok(_) => panic!("Result was not an error"),
        Err(generic_err) => {
            let contract_err: E = generic_err.downcast().unwrap();
            assert_eq!(contract_err, err);
        }
    }
}
