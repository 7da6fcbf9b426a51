//! Interactive query session over a built [`Library`].

use search_core::snippet::{format_score, snippet};
use search_core::{Hit, Library};
use std::io::{self, BufRead, Write};

pub const QUIT: &str = "quit";
const SEPARATOR: &str = "----------------------------------------";

/// Read queries from `input` until `quit` or EOF, writing ranked results to `out`.
pub fn run_session<R: BufRead, W: Write>(library: &Library, input: R, out: &mut W, top_k: usize) -> io::Result<()> {
    writeln!(out, "\nSearch Engine Ready! Enter your search query (or '{QUIT}' to exit):")?;
    let mut lines = input.lines();
    loop {
        write!(out, "\nSearch: ")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        let query = line?;
        let query = query.trim();
        if query.eq_ignore_ascii_case(QUIT) { break; }
        if query.is_empty() { continue; }

        let hits = library.search(query, top_k);
        if hits.is_empty() {
            writeln!(out, "No results found.")?;
            continue;
        }
        writeln!(out, "\nSearch Results:")?;
        for (i, hit) in hits.iter().enumerate() {
            write_hit(out, i + 1, hit, query)?;
        }
    }
    writeln!(out, "\nGoodbye!")?;
    Ok(())
}

fn write_hit<W: Write>(out: &mut W, rank: usize, hit: &Hit<'_>, query: &str) -> io::Result<()> {
    writeln!(out, "\n{rank}. {}", hit.doc.title)?;
    writeln!(out, "URL: {}", hit.doc.url)?;
    writeln!(out, "Score: {}", format_score(hit.score))?;
    writeln!(out, "Snippet: {}", snippet(&hit.doc.text, query))?;
    writeln!(out, "{SEPARATOR}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_core::{Corpus, Normalizer};

    fn library() -> Library {
        let mut corpus = Corpus::new();
        corpus.push("https://e.org/wiki/Pharaoh", "Pharaoh", "The pharaoh ruled Egypt.").unwrap();
        corpus.push("https://e.org/wiki/Egypt", "Egypt", "Ancient Egypt had many pharaohs.").unwrap();
        corpus.push("https://e.org/wiki/Gluon", "Gluon", "Gluons bind quarks.").unwrap();
        Library::build(corpus, Normalizer::new()).unwrap()
    }

    fn session(input: &str) -> String {
        let mut out = Vec::new();
        run_session(&library(), input.as_bytes(), &mut out, 10).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_ranked_results() {
        let out = session("pharaoh egypt\nquit\n");
        assert!(out.contains("Search Results:"));
        assert!(out.contains("1. Pharaoh\nURL: https://e.org/wiki/Pharaoh\nScore: 1.0000\nSnippet: The pharaoh ruled Egypt.\n"));
        assert!(out.contains("2. Egypt\n"));
        assert!(!out.contains("Gluon"));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn quit_is_case_insensitive_and_stops_reading() {
        let out = session("QuIt\npharaoh\n");
        assert!(!out.contains("Search Results:"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn blank_lines_are_skipped_and_misses_reported() {
        let out = session("\n   \nsphinx\n");
        assert_eq!(out.matches("No results found.").count(), 1);
        assert!(out.contains("Goodbye!"));
    }
}
