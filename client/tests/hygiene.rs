//! Source hygiene for the client crate.
//!
//! The client compiles twice: once for the server render (`ssr`) and once
//! for the browser (`hydrate`). Browser-only code has to sit behind the
//! `hydrate` gate, and the server stubs that stand in for it may only bind
//! their arguments. Everything else about silent error loss is budgeted.

use std::fs;
use std::path::{Path, PathBuf};

const HYDRATE_GATE: &str = r#"#[cfg(feature = "hydrate")]"#;
const SSR_GATE: &str = r#"#[cfg(not(feature = "hydrate"))]"#;

/// Patterns that only make sense in the browser build.
const BROWSER_ONLY: &[&str] = &[
    "spawn_local(",
    "web_sys::",
    "js_sys::",
    "gloo_net::",
    "gloo_timers::",
    "wasm_bindgen_futures::",
];

/// (pattern, budget). `.ok()` covers reading the optional `error` field of
/// a failed response body and the HTTP status check on responses.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("#[allow(dead_code)]", 0),
    (".ok()", 2),
];

struct SourceFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceFile {
    fn hits(&self, pattern: &str) -> impl Iterator<Item = usize> + '_ {
        let pattern = pattern.to_owned();
        self.lines
            .iter()
            .enumerate()
            .filter(move |(_, line)| code_of(line).contains(&pattern))
            .map(|(idx, _)| idx)
    }

    fn location(&self, idx: usize) -> String {
        format!("{}:{}: {}", self.path.display(), idx + 1, self.lines[idx].trim())
    }

    /// Attributes and signature lines directly above `idx`, up to the
    /// previous statement or block boundary.
    fn header_above(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.lines[..idx]
            .iter()
            .rev()
            .map(|line| line.trim())
            .take_while(|line| !line.is_empty() && !line.ends_with(';') && !line.ends_with('{') && !line.ends_with('}'))
    }

    /// Lines that open a block enclosing `idx`, innermost first.
    fn enclosing_openers(&self, idx: usize) -> Vec<usize> {
        let mut openers = Vec::new();
        let mut depth = 0i64;
        for j in (0..idx).rev() {
            let code = code_of(&self.lines[j]);
            depth += count(&code, '}') - count(&code, '{');
            if depth < 0 {
                openers.push(j);
                depth = 0;
            }
        }
        openers
    }

    /// Whether line `idx` sits under `gate`, either directly or through an
    /// enclosing block.
    fn is_gated(&self, idx: usize, gate: &str) -> bool {
        if self.header_above(idx).any(|line| line == gate) {
            return true;
        }
        self.enclosing_openers(idx)
            .into_iter()
            .any(|opener| self.header_above(opener).any(|line| line == gate))
    }

    /// Whether line `idx` sits directly in a block gated by `gate`.
    fn innermost_block_is(&self, idx: usize, gate: &str) -> bool {
        self.enclosing_openers(idx)
            .first()
            .is_some_and(|opener| self.header_above(*opener).any(|line| line == gate))
    }
}

fn count(code: &str, ch: char) -> i64 {
    i64::try_from(code.chars().filter(|c| *c == ch).count()).unwrap_or(i64::MAX)
}

/// Strip string literal contents and trailing `//` comments from a line.
fn code_of(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    let mut in_string = false;
    while let Some(c) = chars.next() {
        if in_string {
            match c {
                '\\' => {
                    chars.next();
                }
                '"' => {
                    in_string = false;
                    out.push('"');
                }
                _ => {}
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push('"');
            }
            '/' if chars.peek() == Some(&'/') => break,
            _ => out.push(c),
        }
    }
    out
}

/// `let _ = ident;` or `let _ = (a, b);`: an SSR stub binding its arguments.
fn is_argument_bind(line: &str) -> bool {
    let Some(rhs) = line.trim().strip_prefix("let _ =").and_then(|rest| rest.trim().strip_suffix(';')) else {
        return false;
    };
    let inner = rhs.trim().strip_prefix('(').and_then(|r| r.strip_suffix(')')).unwrap_or(rhs);
    inner
        .split(',')
        .map(str::trim)
        .all(|name| !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the client crate root");
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, lines: content.lines().map(str::to_owned).collect() });
            }
        }
    }
}

fn report(found: &[String]) -> String {
    found.iter().map(|hit| format!("  {hit}")).collect::<Vec<_>>().join("\n")
}

// =============================================================================
// Budgets
// =============================================================================

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut over = Vec::new();
    for (pattern, budget) in BUDGETS {
        let found: Vec<String> = files
            .iter()
            .flat_map(|file| file.hits(pattern).map(|idx| file.location(idx)).collect::<Vec<_>>())
            .collect();
        if found.len() > *budget {
            over.push(format!("{pattern}: found {}, max {budget}\n{}", found.len(), report(&found)));
        }
    }
    assert!(over.is_empty(), "budget exceeded:\n{}", over.join("\n"));
}

#[test]
fn no_silent_discards() {
    let files = source_files();
    let found: Vec<String> = files
        .iter()
        .flat_map(|file| {
            file.hits("let _ =")
                .filter(|idx| !is_argument_bind(&file.lines[*idx]))
                .map(|idx| file.location(idx))
                .collect::<Vec<_>>()
        })
        .collect();
    assert!(
        found.is_empty(),
        "discarded results; use util::signal::update_live for signal writes or log the error:\n{}",
        report(&found)
    );
}

// =============================================================================
// Build gates
// =============================================================================

#[test]
fn argument_binds_live_in_server_stubs() {
    let files = source_files();
    let found: Vec<String> = files
        .iter()
        .flat_map(|file| {
            file.hits("let _ =")
                .filter(|idx| is_argument_bind(&file.lines[*idx]) && !file.innermost_block_is(*idx, SSR_GATE))
                .map(|idx| file.location(idx))
                .collect::<Vec<_>>()
        })
        .collect();
    assert!(found.is_empty(), "argument binds outside a non-hydrate block:\n{}", report(&found));
}

#[test]
fn browser_apis_are_hydrate_gated() {
    let files = source_files();
    let found: Vec<String> = files
        .iter()
        .flat_map(|file| {
            BROWSER_ONLY
                .iter()
                .flat_map(|pattern| file.hits(pattern).collect::<Vec<_>>())
                .filter(|idx| !file.is_gated(*idx, HYDRATE_GATE))
                .map(|idx| file.location(idx))
                .collect::<Vec<_>>()
        })
        .collect();
    assert!(found.is_empty(), "browser-only code outside a hydrate gate:\n{}", report(&found));
}

// =============================================================================
// Checker
// =============================================================================

#[test]
fn argument_bind_shapes() {
    assert!(is_argument_bind("        let _ = room_id;"));
    assert!(is_argument_bind("let _ = (state, token);"));
    assert!(!is_argument_bind("let _ = state.try_update(|s| s.busy = false);"));
    assert!(!is_argument_bind("let _ = tx.send(msg);"));
}

#[test]
fn code_of_ignores_braces_in_strings_and_comments() {
    assert_eq!(code_of(r#"warn!("{e:?}"); // {"#).trim_end(), r#"warn!("");"#);
    assert_eq!(count(&code_of(r#"format!("\"{")"#), '{'), 0);
}

#[test]
fn gate_detection_follows_enclosing_blocks() {
    let file = SourceFile {
        path: PathBuf::from("sample.rs"),
        lines: [
            "pub fn play(src: &str) {",
            r#"    #[cfg(feature = "hydrate")]"#,
            "    {",
            "        match start(src) {",
            "            Ok(p) => leptos::task::spawn_local(async move {",
            "                wait(p).await;",
            "            }),",
            "            Err(_) => {}",
            "        }",
            "    }",
            r#"    #[cfg(not(feature = "hydrate"))]"#,
            "    {",
            "        let _ = src;",
            "    }",
            "    leptos::task::spawn_local(async {});",
            "}",
        ]
        .map(str::to_owned)
        .to_vec(),
    };
    assert!(file.is_gated(4, HYDRATE_GATE));
    assert!(file.is_gated(5, HYDRATE_GATE));
    assert!(file.innermost_block_is(12, SSR_GATE));
    assert!(!file.is_gated(14, HYDRATE_GATE));
}
