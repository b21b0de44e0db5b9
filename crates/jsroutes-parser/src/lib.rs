/// Route path pattern parser
///
/// Turns a Rails-style path pattern like `/users/:id(/:format)` into an
/// ordered segment list plus the parameter names the path consumes.

pub mod ast;
pub mod token;

pub use ast::{CompiledPattern, Segment};
pub use token::{PatternError, SegmentToken, tokenize};

/// Parse a route path pattern.
///
/// Segments keep their own classification wherever they sit; the closing
/// `:name)` chunk is the one semantic boundary of an optional group, so a
/// single group state flag suffices. Groups may repeat along the path but
/// cannot nest.
pub fn parse(path: &str) -> Result<CompiledPattern<'_>, PatternError> {
    let tokens = tokenize(path)?;

    let mut segments = Vec::with_capacity(tokens.len());
    let mut param_keys = Vec::new();
    let mut in_group = false;

    for token in tokens {
        match token {
            SegmentToken::Literal { text, opens } => {
                segments.push(Segment::Literal(text));
                if opens {
                    open_group(&mut in_group)?;
                }
            }
            SegmentToken::Param { name, opens } => {
                segments.push(Segment::Required(name));
                param_keys.push(name);
                if opens {
                    open_group(&mut in_group)?;
                }
            }
            SegmentToken::Open => open_group(&mut in_group)?,
            SegmentToken::OptionalClose { name } => {
                if !in_group {
                    return Err(PatternError::UnexpectedClose(name.to_string()));
                }
                in_group = false;
                segments.push(Segment::OptionalTail(name));
                param_keys.push(name);
            }
        }
    }

    if in_group {
        return Err(PatternError::UnterminatedGroup);
    }

    Ok(CompiledPattern { segments, param_keys })
}

fn open_group(in_group: &mut bool) -> Result<(), PatternError> {
    if *in_group {
        return Err(PatternError::NestedGroup);
    }
    *in_group = true;
    Ok(())
}
