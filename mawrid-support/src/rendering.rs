//! Text rendering for error messages and dependency trees.

/// Joins a resolution chain with arrows.
///
/// # Examples
/// ```
/// use mawrid_support::rendering::render_chain;
///
/// let chain = vec!["Shopper", "Box<dyn CreditCard>", "Shopper"];
/// assert_eq!(render_chain(&chain), "Shopper → Box<dyn CreditCard> → Shopper");
/// ```
pub fn render_chain(chain: &[impl AsRef<str>]) -> String {
    chain
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// One node of a rendered dependency tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Distance from the root (the root is 0).
    pub depth: usize,
    /// The requested (abstract) type name.
    pub requested: String,
    /// The concrete type that satisfies it, when it differs from `requested`.
    pub concrete: Option<String>,
}

/// Renders a pre-order list of tree entries as indented text.
///
/// ```text
/// Shopper
/// └─ Box<dyn CreditCard> => Visa
/// ```
pub fn render_tree(entries: &[TreeEntry]) -> String {
    let mut out = String::new();

    for entry in entries {
        if entry.depth > 0 {
            out.push_str(&"   ".repeat(entry.depth - 1));
            out.push_str("└─ ");
        }
        out.push_str(&entry.requested);
        if let Some(ref concrete) = entry.concrete {
            out.push_str(" => ");
            out.push_str(concrete);
        }
        out.push('\n');
    }

    out
}

/// Shortens a fully qualified type name for display.
///
/// ```
/// use mawrid_support::rendering::shorten_type_name;
///
/// assert_eq!(shorten_type_name("shop::cards::Visa"), "Visa");
/// assert_eq!(
///     shorten_type_name("alloc::boxed::Box<dyn shop::cards::CreditCard>"),
///     "Box<dyn CreditCard>"
/// );
/// ```
pub fn shorten_type_name(full_name: &str) -> String {
    let mut result = String::with_capacity(full_name.len());
    let mut chars = full_name.chars().peekable();
    let mut segment = String::new();

    while let Some(ch) = chars.next() {
        match ch {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                // path prefix, keep only the last segment
                segment.clear();
            }
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' => {
                result.push_str(&segment);
                result.push(ch);
                segment.clear();
            }
            _ => segment.push(ch),
        }
    }

    result.push_str(&segment);
    result
}

/// Suggests bound type names that look like `requested`.
///
/// Substring matches on the full name rank highest, then matches on the
/// shortened name, then a shared prefix of at least three characters.
pub fn suggest_similar(requested: &str, available: &[&str], max_suggestions: usize) -> Vec<String> {
    let requested_full = requested.to_lowercase();
    let requested_short = shorten_type_name(requested).to_lowercase();

    let mut scored: Vec<(&str, usize)> = available
        .iter()
        .filter(|&&name| name != requested)
        .filter_map(|&name| {
            let full = name.to_lowercase();
            let short = shorten_type_name(name).to_lowercase();

            if full.contains(&requested_full) || requested_full.contains(&full) {
                return Some((name, 100));
            }
            if short.contains(&requested_short) || requested_short.contains(&short) {
                return Some((name, 80));
            }
            // same inner type behind a different wrapper, e.g. Box<dyn T> vs Arc<dyn T>
            if let (Some(a), Some(b)) = (strip_wrapper(&short), strip_wrapper(&requested_short)) {
                if a == b {
                    return Some((name, 70));
                }
            }

            let common = short
                .chars()
                .zip(requested_short.chars())
                .take_while(|(a, b)| a == b)
                .count();
            (common >= 3).then_some((name, common * 10))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    scored
        .into_iter()
        .take(max_suggestions)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Returns the generic argument of `Wrapper<..>`, if `name` has that shape.
fn strip_wrapper(name: &str) -> Option<&str> {
    let open = name.find('<')?;
    name.strip_suffix('>').map(|inner| &inner[open + 1..])
}
