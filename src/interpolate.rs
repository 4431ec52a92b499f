//! Lagrange interpolation over GF(256)

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::field::FieldElement;
use crate::vector::FieldVector;

/// Mapping from evaluation point to value
///
/// Used both for the interpolation nodes of a split and for the shares
/// handed to recovery. Keys are unique by construction.
pub type ShareSet = BTreeMap<FieldElement, FieldVector>;

/// Evaluates at `target` the unique polynomial passing through `nodes`.
///
/// Each of the N bytes is interpolated independently:
///
/// ```text
/// f(x) = Σᵢ yᵢ · Πⱼ≠ᵢ (x − xⱼ) / (xᵢ − xⱼ)
/// ```
///
/// # Errors
/// Returns an error if `nodes` is empty or the values differ in length
///
/// # Examples
///
/// ```rust
/// use slip39::{FieldElement, FieldVector, ShareSet, interpolate};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut nodes = ShareSet::new();
/// nodes.insert(FieldElement::new(1), FieldVector::from_hex("a3")?);
/// nodes.insert(FieldElement::new(2), FieldVector::from_hex("67")?);
/// nodes.insert(FieldElement::new(7), FieldVector::from_hex("e2")?);
///
/// let secret = interpolate(FieldElement::new(255), &nodes)?;
/// assert_eq!(secret, FieldVector::from_hex("a3")?);
/// # Ok(())
/// # }
/// ```
pub fn interpolate(target: FieldElement, nodes: &ShareSet) -> Result<FieldVector> {
    let Some(first) = nodes.values().next() else {
        return Err(Error::invalid(
            "nodes",
            "at least one interpolation point is required",
        ));
    };

    let len = first.len();
    if nodes.values().any(|value| value.len() != len) {
        return Err(Error::invalid(
            "nodes",
            "all interpolation points must have the same length",
        ));
    }

    let mut result = FieldVector::zeros(len);
    for (&x_i, y_i) in nodes {
        let mut basis = FieldElement::ONE;
        for &x_j in nodes.keys().filter(|&&x_j| x_j != x_i) {
            basis = basis * (target - x_j).checked_div(x_i - x_j)?;
        }
        result = result.try_add(&y_i.scale(basis))?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(points: &[(u8, &str)]) -> ShareSet {
        points
            .iter()
            .map(|&(x, y)| (FieldElement::new(x), FieldVector::from_hex(y).unwrap()))
            .collect()
    }

    #[test]
    fn test_single_byte_sample() {
        let set = nodes(&[(1, "A3"), (2, "67"), (7, "E2")]);
        let result = interpolate(FieldElement::new(255), &set).unwrap();
        assert_eq!(result, FieldVector::from_hex("A3").unwrap());
    }

    #[test]
    fn test_two_byte_sample() {
        let set = nodes(&[(1, "A338"), (2, "67F5"), (7, "E26F")]);
        let result = interpolate(FieldElement::new(255), &set).unwrap();
        assert_eq!(result, FieldVector::from_hex("A394").unwrap());
    }

    #[test]
    fn test_interpolating_at_a_node_returns_its_value() {
        let set = nodes(&[(1, "A338"), (2, "67F5"), (7, "E26F")]);
        for (x, y) in &set {
            assert_eq!(&interpolate(*x, &set).unwrap(), y);
        }
    }

    #[test]
    fn test_single_node_is_constant() {
        let set = nodes(&[(4, "0102")]);
        let result = interpolate(FieldElement::new(200), &set).unwrap();
        assert_eq!(result, FieldVector::from_hex("0102").unwrap());
    }

    #[test]
    fn test_empty_nodes_rejected() {
        let result = interpolate(FieldElement::ZERO, &ShareSet::new());
        assert!(matches!(
            result,
            Err(Error::InvalidArgument { name: "nodes", .. })
        ));
    }

    #[test]
    fn test_heterogeneous_lengths_rejected() {
        let set = nodes(&[(1, "A338"), (2, "67")]);
        let result = interpolate(FieldElement::new(255), &set);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("same length")
        );
    }
}
