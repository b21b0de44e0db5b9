/// Tokenizer for route path patterns
///
/// A pattern splits on `/` into chunks. Optional groups ride along as
/// markers rather than chunks of their own: a chunk may open a group by
/// ending in `(`, and the `(/:name)` form closes with a `:name)` chunk.

/// One `/`-delimited chunk of a route path, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentToken<'p> {
    /// Fixed text: `users`. `opens` is set when the chunk ends with `(`,
    /// starting an optional group after this segment: `users(`.
    Literal { text: &'p str, opens: bool },

    /// Named parameter: `:id`. `opens` as above: `:id(`.
    Param { name: &'p str, opens: bool },

    /// Close of an optional group capturing a parameter: `:format)`.
    OptionalClose { name: &'p str },

    /// A bare `(` chunk; the group opens with no segment of its own.
    Open,
}

/// Error raised while tokenizing or parsing a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    EmptyParamName(String),
    InvalidParamName(String),
    InvalidSegment(String),
    ControlCharacter(String),
    InvalidOptional(String),
    NestedGroup,
    UnexpectedClose(String),
    UnterminatedGroup,
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PatternError::EmptyParamName(chunk) => {
                write!(f, "Parameter segment '{}' has an empty name", chunk)
            }
            PatternError::InvalidParamName(name) => {
                write!(f, "Parameter name '{}' is not a valid identifier", name)
            }
            PatternError::InvalidSegment(chunk) => {
                write!(f, "Segment '{}' contains a stray group delimiter", chunk)
            }
            PatternError::ControlCharacter(chunk) => {
                write!(f, "Segment {:?} contains a control character", chunk)
            }
            PatternError::InvalidOptional(chunk) => {
                write!(f, "Optional group close '{}' is not a ':name' segment", chunk)
            }
            PatternError::NestedGroup => write!(f, "Optional groups cannot nest"),
            PatternError::UnexpectedClose(name) => {
                write!(f, "Optional group closed at ':{}' without a matching '('", name)
            }
            PatternError::UnterminatedGroup => write!(f, "Optional group is never closed"),
        }
    }
}

impl std::error::Error for PatternError {}

/// Split a pattern on `/` and classify every chunk.
///
/// The empty chunk produced by a leading `/` carries no token. Interior and
/// trailing empty chunks become empty literals, so doubled and trailing
/// separators survive into the compiled pattern.
pub fn tokenize(path: &str) -> Result<Vec<SegmentToken<'_>>, PatternError> {
    let mut tokens = Vec::new();
    for (i, chunk) in path.split('/').enumerate() {
        if i == 0 && chunk.is_empty() {
            continue;
        }
        tokens.push(scan_chunk(chunk)?);
    }
    Ok(tokens)
}

fn scan_chunk(chunk: &str) -> Result<SegmentToken<'_>, PatternError> {
    if chunk == "(" {
        return Ok(SegmentToken::Open);
    }

    if let Some(body) = chunk.strip_suffix(')') {
        let name = body
            .strip_prefix(':')
            .ok_or_else(|| PatternError::InvalidOptional(chunk.to_string()))?;
        check_param_name(chunk, name)?;
        return Ok(SegmentToken::OptionalClose { name });
    }

    let (content, opens) = match chunk.strip_suffix('(') {
        Some(content) => (content, true),
        None => (chunk, false),
    };
    if content.contains(['(', ')']) {
        return Err(PatternError::InvalidSegment(chunk.to_string()));
    }
    // Chunk text lands inside a single-quoted one-line string in the
    // generated source; control characters cannot be carried there.
    if content.chars().any(char::is_control) {
        return Err(PatternError::ControlCharacter(chunk.to_string()));
    }

    if let Some(name) = content.strip_prefix(':') {
        check_param_name(chunk, name)?;
        return Ok(SegmentToken::Param { name, opens });
    }

    Ok(SegmentToken::Literal { text: content, opens })
}

fn check_param_name(chunk: &str, name: &str) -> Result<(), PatternError> {
    if name.is_empty() {
        Err(PatternError::EmptyParamName(chunk.to_string()))
    } else if !is_param_name(name) {
        Err(PatternError::InvalidParamName(name.to_string()))
    } else {
        Ok(())
    }
}

fn is_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
