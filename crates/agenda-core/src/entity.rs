/// A validated value that lives in a registry under a unique identifier.
///
/// The identifier is fixed at construction; implementors expose no setter
/// for it.
pub trait Record: Clone + Send + Sync + 'static {
    /// Short label used in log fields, e.g. `"contact"`.
    const KIND: &'static str;

    /// The registry key.
    fn id(&self) -> &str;
}
