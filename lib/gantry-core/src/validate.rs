//! Required-parameter validation.

use std::collections::HashMap;

use crate::{Error, Result};

/// Check that every required parameter was supplied.
///
/// A parameter is missing when its entry is absent from the map or its value
/// is unset. Fails with [`Error::MissingParameter`] naming the first missing
/// parameter in declaration order, before any request is built.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] for the first required name without a
/// value.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use gantry_core::check_required;
///
/// let mut params = HashMap::new();
/// params.insert("compartmentId", Some("ocid1.compartment.oc1..x".to_string()));
/// params.insert("displayName", None);
///
/// assert!(check_required("ListInstances", &["compartmentId"], &params).is_ok());
/// assert!(check_required("ListInstances", &["displayName"], &params).is_err());
/// ```
pub fn check_required(
    operation: &str,
    required: &[&str],
    params: &HashMap<&str, Option<String>>,
) -> Result<()> {
    for name in required {
        let supplied = params.get(name).is_some_and(Option::is_some);
        if !supplied {
            return Err(Error::missing_parameter(operation, *name));
        }
    }
    Ok(())
}
