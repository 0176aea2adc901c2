//! Public AST types for format strings.

/// A parsed string-table format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    pub segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// Number of positional arguments this template consumes.
    ///
    /// Sequential `%s` specifiers and explicit `%N$s` specifiers are counted
    /// independently; the template needs as many arguments as the larger of
    /// the two demands.
    pub fn argument_count(&self) -> usize {
        let mut sequential = 0;
        let mut explicit = 0;
        for segment in &self.segments {
            match segment {
                FormatSegment::Argument(ArgumentRef::Next) => sequential += 1,
                FormatSegment::Argument(ArgumentRef::Index(index)) => {
                    explicit = explicit.max(index + 1);
                }
                FormatSegment::Literal(_) => {}
            }
        }
        sequential.max(explicit)
    }

    /// Concatenation of all literal segments.
    pub fn literal_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                FormatSegment::Literal(text) => Some(text.as_str()),
                FormatSegment::Argument(_) => None,
            })
            .collect()
    }
}

/// A segment within a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Literal text, with `%%` already unescaped.
    Literal(String),
    /// A string argument specifier.
    Argument(ArgumentRef),
}

/// Which argument a specifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentRef {
    /// `%s`: the next argument in sequence.
    Next,
    /// `%N$s`: the argument at zero-based index `N - 1`.
    Index(usize),
}

/// A piece of a resolved format string split on placeholder markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Literal(String),
    /// A `${N}` marker referring to the zero-based argument `N`.
    Marker(usize),
}
