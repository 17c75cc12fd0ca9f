//! Canonical text form for TypeScript type strings.
//!
//! Normalization never fails; any input maps to some string. Array-ness is
//! folded into an `array` suffix and `Promise<T>` collapses to `promise`, so
//! the compatibility checks can work on plain text.

/// Canonicalize a type string for comparison.
///
/// Steps, in order:
/// 1. lowercase
/// 2. strip all whitespace
/// 3. `T[]` → `Tarray`
/// 4. `Array<T>` → `Tarray` (`(A|B)array` when `T` is a union)
/// 5. `{}` → `object`
/// 6. `Promise<T>` → `promise`
/// 7. `;` member separators → `,`
/// 8. object members sorted lexicographically, recursively
/// 9. objects left with no members (`{;}`) → `object`
#[must_use]
pub fn normalize(ty: &str) -> String {
    let compact: String = ty
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let suffixed = compact.replace("[]", "array");
    let generic_arrays = rewrite_generic(&suffixed, "array", |inner| {
        if split_top_level(inner, '|').len() > 1 {
            format!("({inner})array")
        } else {
            format!("{inner}array")
        }
    });
    let objects = generic_arrays.replace("{}", "object");
    let promises = rewrite_generic(&objects, "promise", |_| String::from("promise"));
    let separators = promises.replace(';', ",");

    sort_object_members(&separators).replace("{}", "object")
}

/// Whether the whole string is one brace-delimited object literal.
///
/// `{a:string}|{b:number}` is not: its first brace closes before the end.
#[must_use]
pub fn is_object_type(ty: &str) -> bool {
    ty.starts_with('{') && matching_close(ty, 0) == Some(ty.len() - 1)
}

/// Split on `separator` wherever it is not nested inside `{}`, `[]`, `()`
/// or `<>`. The `>` of an arrow (`=>`) does not close a bracket.
///
/// Always returns at least one part; parts are not trimmed.
#[must_use]
pub fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut prev = None;

    for (index, c) in input.char_indices() {
        match c {
            '{' | '[' | '(' | '<' => depth += 1,
            '}' | ']' | ')' => depth = depth.saturating_sub(1),
            '>' if prev != Some('=') => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(&input[start..index]);
                start = index + c.len_utf8();
            }
            _ => {}
        }
        prev = Some(c);
    }
    parts.push(&input[start..]);
    parts
}

/// Drop parentheses that wrap the entire string, e.g. `((string|number))`.
pub(crate) fn strip_enclosing_parens(mut ty: &str) -> &str {
    while ty.starts_with('(') && matching_close(ty, 0) == Some(ty.len() - 1) {
        ty = &ty[1..ty.len() - 1];
    }
    ty
}

/// Byte index of the bracket closing the one at `open`.
fn matching_close(input: &str, open: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    let (opener, closer) = match bytes.get(open)? {
        b'{' => (b'{', b'}'),
        b'[' => (b'[', b']'),
        b'(' => (b'(', b')'),
        b'<' => (b'<', b'>'),
        _ => return None,
    };

    let mut depth = 0usize;
    for (index, &byte) in bytes.iter().enumerate().skip(open) {
        if byte == opener {
            depth += 1;
        } else if byte == closer {
            if byte == b'>' && index > 0 && bytes[index - 1] == b'=' {
                continue;
            }
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}

/// Rewrite every `name<inner>` whose `name` starts a word.
///
/// Rescans from the rewritten position, so nested occurrences
/// (`array<array<t>>`) are rewritten too. Unbalanced occurrences are left as-is.
fn rewrite_generic(input: &str, name: &str, rewrite: impl Fn(&str) -> String) -> String {
    let opener = format!("{name}<");
    let mut out = input.to_string();
    let mut from = 0;

    while let Some(offset) = out[from..].find(&opener) {
        let start = from + offset;
        let open = start + name.len();

        let at_word_start = out[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '$'));
        let close = if at_word_start {
            matching_close(&out, open)
        } else {
            None
        };

        match close {
            Some(close) => {
                let replacement = rewrite(&out[open + 1..close]);
                out.replace_range(start..=close, &replacement);
                from = start;
            }
            None => from = open + 1,
        }
    }
    out
}

/// Sort the members of every object literal, innermost first.
fn sort_object_members(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let Some(close) = matching_close(rest, open) else {
            out.push_str(&rest[open..]);
            return out;
        };

        let body = sort_object_members(&rest[open + 1..close]);
        let mut members: Vec<&str> = split_top_level(&body, ',')
            .into_iter()
            .map(str::trim)
            .filter(|member| !member.is_empty())
            .collect();
        members.sort_unstable();

        out.push('{');
        out.push_str(&members.join(","));
        out.push('}');
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    out
}
