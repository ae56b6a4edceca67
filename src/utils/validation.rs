//! Parameter validation utilities.
//!
//! This module provides the range checks shared by configuration
//! validation and the simulation entry points. Each check returns
//! `Err(String)` with a message naming the offending parameter so callers
//! can wrap it in their own error type.

/// Validate that a count is at least one
///
/// # Examples
/// ```
/// use wsnsim::utils::validation::validate_count;
///
/// assert!(validate_count("num_nodes", 5).is_ok());
/// assert!(validate_count("num_nodes", 0).is_err());
/// ```
pub fn validate_count(name: &str, value: usize) -> Result<(), String> {
    if value == 0 {
        return Err(format!("{} must be at least 1", name));
    }
    Ok(())
}

/// Validate that a value is finite and strictly positive
///
/// # Examples
/// ```
/// use wsnsim::utils::validation::validate_positive;
///
/// assert!(validate_positive("area_size", 100.0).is_ok());
/// assert!(validate_positive("area_size", 0.0).is_err());
/// assert!(validate_positive("area_size", f64::INFINITY).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{} must be a finite value greater than 0 (got {})", name, value));
    }
    Ok(())
}

/// Validate that a value is finite and not negative
pub fn validate_non_negative(name: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} must be a finite value of at least 0 (got {})", name, value));
    }
    Ok(())
}

/// Validate that a value lies within the closed interval `[0, 1]`
///
/// Used for election probabilities and the pheromone decay rate.
///
/// # Examples
/// ```
/// use wsnsim::utils::validation::validate_unit_interval;
///
/// assert!(validate_unit_interval("decay", 0.0).is_ok());
/// assert!(validate_unit_interval("decay", 1.0).is_ok());
/// assert!(validate_unit_interval("decay", 1.5).is_err());
/// assert!(validate_unit_interval("decay", f64::NAN).is_err());
/// ```
pub fn validate_unit_interval(name: &str, value: f64) -> Result<(), String> {
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{} must be within [0, 1] (got {})", name, value));
    }
    Ok(())
}

/// Validate that a node index refers to a node of the network
pub fn validate_node_index(name: &str, index: usize, node_count: usize) -> Result<(), String> {
    if index >= node_count {
        return Err(format!(
            "{} {} is out of range for a network of {} nodes",
            name, index, node_count
        ));
    }
    Ok(())
}
