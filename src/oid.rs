//! Object identifiers.

use core::fmt;

/// ASN.1 object identifier: a sequence of unsigned integer arcs.
///
/// Curves are looked up in the registry by exact arc-sequence match, so
/// equality is value equality over the arcs.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ObjectIdentifier {
    arcs: Vec<u64>,
}

impl ObjectIdentifier {
    /// Build an identifier from its arc values.
    pub fn new(arcs: impl Into<Vec<u64>>) -> Self {
        let arcs = arcs.into();
        debug_assert!(arcs.len() >= 2, "object identifier needs at least two arcs");
        Self { arcs }
    }

    /// The arc values.
    pub fn arcs(&self) -> &[u64] {
        &self.arcs
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.arcs.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{arc}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_dotted() {
        let oid = ObjectIdentifier::new([1u64, 2, 840, 10045, 2, 1]);
        assert_eq!(oid.to_string(), "1.2.840.10045.2.1");
    }

    #[test]
    fn equality_is_by_arc_sequence() {
        assert_eq!(
            ObjectIdentifier::new([1u64, 3, 132, 0, 10]),
            ObjectIdentifier::new(vec![1, 3, 132, 0, 10]),
        );
        assert_ne!(
            ObjectIdentifier::new([1u64, 3, 132, 0, 10]),
            ObjectIdentifier::new([1u64, 3, 132, 0, 33]),
        );
    }
}
