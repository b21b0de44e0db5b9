/// Compiled forms of route path patterns
///
/// A parsed pattern is an ordered list of segments plus the ordered list of
/// parameter names the path consumes. All types borrow from the pattern
/// string with lifetime 'p for zero-copy slices.

/// One `/`-delimited component of a route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'p> {
    /// Fixed text contributed to the URL verbatim: `users` in `/users/:id`.
    /// An empty text preserves a doubled or trailing separator.
    Literal(&'p str),
    /// Named parameter whose value must be supplied: `:id` in `/users/:id`
    Required(&'p str),
    /// Parameter closing an optional group: `:format` in
    /// `/users/:id(/:format)`. Included, with its leading separator, only
    /// when the parameter is supplied at call time.
    OptionalTail(&'p str),
}

/// A route path pattern compiled to segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern<'p> {
    pub segments: Vec<Segment<'p>>,
    /// Parameter names consumed by the path, required and optional alike,
    /// in left-to-right order. Duplicates are kept. This list is the
    /// exclusion set for the query-string fallback.
    pub param_keys: Vec<&'p str>,
}

impl<'p> CompiledPattern<'p> {
    /// Names of required segments only, in path order.
    pub fn required_keys(&self) -> impl Iterator<Item = &'p str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Required(name) => Some(*name),
            _ => None,
        })
    }
}
