//! Parsing of the `Link` response header (RFC 8288) used for pagination.
//!
//! GitHub sends entries such as
//! `<https://api.github.com/user/1/starred?page=2>; rel="next", <...>; rel="last"`.

/// Returns the target of the entry whose `rel` includes `next`, if any.
pub fn next_link(header: &str) -> Option<String> {
    let mut rest = header;

    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let end = after.find('>')?;
        let target = after[..end].trim();

        let tail = &after[end + 1..];
        let params_end = tail.find('<').unwrap_or(tail.len());
        let params = &tail[..params_end];

        if params.split(';').any(is_rel_next) {
            return Some(target.to_string());
        }

        rest = &tail[params_end..];
    }

    None
}

fn is_rel_next(param: &str) -> bool {
    let Some((name, value)) = param.split_once('=') else {
        return false;
    };

    name.trim().eq_ignore_ascii_case("rel")
        && value
            .trim_matches(|c: char| c == '"' || c == ',' || c.is_whitespace())
            .split_whitespace()
            .any(|rel| rel.eq_ignore_ascii_case("next"))
}
