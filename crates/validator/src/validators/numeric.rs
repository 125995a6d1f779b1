//! Number validator

use crate::foundation::{ValidationError, ValueExt, truthy_number};

crate::validator! {
    /// Validates that a present value parses to a non-zero number.
    ///
    /// Parsing is prefix-based, so `"12abc"` is accepted. `"0"` parses to
    /// zero and is rejected.
    pub Number;
    rule(input) {
        !input.is_present() || truthy_number(input.value.parse_number()).is_some()
    }
    error(input) { ValidationError::new("number") }
    fn number();
}
