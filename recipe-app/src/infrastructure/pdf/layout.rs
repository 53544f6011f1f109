//! Text layout for the built-in Helvetica face: line breaking against the
//! printable column using the font's advance widths, then pagination.

use textwrap::core::Fragment;
use textwrap::wrap_algorithms::wrap_first_fit;
use textwrap::WordSeparator;

pub(super) const FONT_SIZE_PT: f32 = 12.0;

/// A4 width minus the 10 mm left and right margins.
const COLUMN_WIDTH_MM: f32 = 190.0;

/// 10 mm lines between the top margin and the 20 mm bottom break.
const LINES_PER_PAGE: usize = 26;

const MM_PER_PT: f64 = 25.4 / 72.0;

/// Splits `text` into pages of wrapped lines.
///
/// Explicit line breaks are kept, blank lines stay blank, words wrap at
/// spaces and anything wider than the column is split hard.
pub(super) fn layout_pages(text: &str) -> Vec<Vec<String>> {
    let lines: Vec<String> = text.lines().flat_map(wrap_line).collect();

    if lines.is_empty() {
        return vec![Vec::new()];
    }

    lines
        .chunks(LINES_PER_PAGE)
        .map(|page| page.to_vec())
        .collect()
}

/// A run of text plus the spaces that follow it, measured in millimetres.
#[derive(Debug)]
struct Run<'a> {
    text: &'a str,
    whitespace: &'a str,
    width: f64,
}

impl Fragment for Run<'_> {
    fn width(&self) -> f64 {
        self.width
    }

    fn whitespace_width(&self) -> f64 {
        text_width_mm(self.whitespace)
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

fn wrap_line(line: &str) -> Vec<String> {
    let line = line.trim_end();
    if line.is_empty() {
        return vec![String::new()];
    }

    let runs: Vec<Run<'_>> = WordSeparator::AsciiSpace
        .find_words(line)
        .flat_map(|word| split_wide(word.word, word.whitespace))
        .collect();

    wrap_first_fit(&runs, &[f64::from(COLUMN_WIDTH_MM)])
        .into_iter()
        .map(|runs| {
            let mut out = String::new();
            for (i, run) in runs.iter().enumerate() {
                out.push_str(run.text);
                if i + 1 < runs.len() {
                    out.push_str(run.whitespace);
                }
            }
            out
        })
        .collect()
}

/// Cuts a word wider than the column into pieces that each fit. Only the
/// last piece keeps the trailing spaces.
fn split_wide<'a>(word: &'a str, whitespace: &'a str) -> Vec<Run<'a>> {
    let column = f64::from(COLUMN_WIDTH_MM);
    let mut runs = Vec::new();
    let mut start = 0;
    let mut width = 0.0;

    for (idx, c) in word.char_indices() {
        let advance = char_width_mm(c);
        if width + advance > column && idx > start {
            runs.push(Run {
                text: &word[start..idx],
                whitespace: "",
                width,
            });
            start = idx;
            width = 0.0;
        }
        width += advance;
    }

    runs.push(Run {
        text: &word[start..],
        whitespace,
        width,
    });
    runs
}

fn text_width_mm(text: &str) -> f64 {
    text.chars().map(char_width_mm).sum()
}

fn char_width_mm(c: char) -> f64 {
    f64::from(advance_width(c)) / 1000.0 * f64::from(FONT_SIZE_PT) * MM_PER_PT
}

/// Helvetica advance widths in 1/1000 em (Adobe AFM), Latin-1 range.
fn advance_width(c: char) -> u16 {
    match c {
        ' ' | '!' | ',' | '.' | '/' | ':' | ';' | '[' | '\\' | ']' | 'I' | 'f' | 't' => 278,
        '"' => 355,
        '#' | '$' | '0'..='9' | '?' | '_' | 'L' => 556,
        'a' | 'b' | 'd' | 'e' | 'g' | 'h' | 'n' | 'o' | 'p' | 'q' | 'u' => 556,
        '%' => 889,
        '&' => 667,
        '\'' => 191,
        '(' | ')' | '-' | '`' | 'r' => 333,
        '*' => 389,
        '+' | '<' | '=' | '>' | '~' => 584,
        '@' => 1015,
        'A' | 'B' | 'E' | 'K' | 'P' | 'S' | 'V' | 'X' | 'Y' => 667,
        'C' | 'D' | 'H' | 'N' | 'R' | 'U' => 722,
        'F' | 'T' | 'Z' => 611,
        'G' | 'O' | 'Q' => 778,
        'J' => 500,
        'M' | 'm' => 833,
        'W' => 944,
        '^' => 469,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' => 500,
        'i' | 'j' | 'l' => 222,
        'w' => 722,
        '{' | '}' => 334,
        '|' => 260,
        '\u{A0}' | '\u{B7}' => 278,
        '\u{A1}' | '\u{A8}' | '\u{AD}' | '\u{AF}' | '\u{B2}'..='\u{B4}' | '\u{B8}' | '\u{B9}' => 333,
        '\u{A2}'..='\u{A5}' | '\u{A7}' | '\u{AB}' | '\u{B5}' | '\u{BB}' => 556,
        '\u{A6}' => 260,
        '\u{A9}' | '\u{AE}' => 737,
        '\u{AA}' => 370,
        '\u{AC}' | '\u{B1}' | '\u{D7}' | '\u{F7}' => 584,
        '\u{B0}' => 400,
        '\u{B6}' => 537,
        '\u{BA}' => 365,
        '\u{BC}'..='\u{BE}' => 834,
        '\u{BF}' | '\u{DF}' | '\u{F8}' => 611,
        '\u{C0}'..='\u{C5}' | '\u{C8}'..='\u{CB}' | '\u{DD}' | '\u{DE}' => 667,
        '\u{C6}' => 1000,
        '\u{C7}' | '\u{D0}' | '\u{D1}' | '\u{D9}'..='\u{DC}' => 722,
        '\u{CC}'..='\u{CF}' | '\u{EC}'..='\u{EF}' => 278,
        '\u{D2}'..='\u{D6}' | '\u{D8}' => 778,
        '\u{E0}'..='\u{E5}' | '\u{E8}'..='\u{EB}' | '\u{F0}'..='\u{F6}' => 556,
        '\u{F9}'..='\u{FC}' | '\u{FE}' => 556,
        '\u{E6}' => 889,
        '\u{E7}' | '\u{FD}' | '\u{FF}' => 500,
        _ => 1000,
    }
}

/// Maps text onto what the built-in fonts can encode (Latin-1).
pub(super) fn to_pdf_charset(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => '"',
            '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            '\u{2022}' => '*',
            '\u{00A0}' | '\u{2009}' | '\u{202F}' => ' ',
            '\t' => ' ',
            c if (c as u32) < 0x100 => c,
            _ => '?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(pages: &[Vec<String>]) -> Vec<String> {
        pages.iter().flatten().cloned().collect()
    }

    fn fits_column(line: &str) -> bool {
        text_width_mm(line) <= f64::from(COLUMN_WIDTH_MM)
    }

    #[test]
    fn test_short_text_single_page() {
        let pages = layout_pages("Tomato Pasta\n\n1. Boil pasta");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0], vec!["Tomato Pasta", "", "1. Boil pasta"]);
    }

    #[test]
    fn test_wraps_on_words() {
        let sentence = "stir ".repeat(40);
        let lines = flatten(&layout_pages(sentence.trim()));
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| fits_column(l)));
        assert!(lines.iter().all(|l| !l.starts_with(' ') && !l.ends_with(' ')));
        assert_eq!(lines.join(" "), sentence.trim());
    }

    #[test]
    fn test_wide_glyphs_stay_inside_column() {
        let word = "W".repeat(85);
        let lines = flatten(&layout_pages(&word));
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| fits_column(l)));
        assert_eq!(lines.concat(), word);

        let shouting = "MWMWMWMWMW ".repeat(8);
        let lines = flatten(&layout_pages(shouting.trim()));
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| fits_column(l)));
        assert_eq!(lines.join(" "), shouting.trim());
    }

    #[test]
    fn test_narrow_glyphs_fill_more_of_the_line() {
        let narrow = flatten(&layout_pages(&"il ".repeat(60)));
        let wide = flatten(&layout_pages(&"WM ".repeat(60)));
        assert!(narrow.len() < wide.len());
    }

    #[test]
    fn test_splits_long_words() {
        let word = "x".repeat(200);
        let lines = flatten(&layout_pages(&word));
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| fits_column(l)));
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_continuation_lines_drop_space_runs() {
        let text = "simmer   ".repeat(30);
        let lines = flatten(&layout_pages(&text));
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| !l.starts_with(' ') && !l.ends_with(' ')));
        assert!(lines.iter().all(|l| fits_column(l)));
    }

    #[test]
    fn test_paginates() {
        let text = (1..=LINES_PER_PAGE + 3)
            .map(|n| format!("Step {}", n))
            .collect::<Vec<_>>()
            .join("\n");
        let pages = layout_pages(&text);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), LINES_PER_PAGE);
        assert_eq!(pages[1], vec!["Step 27", "Step 28", "Step 29"]);
    }

    #[test]
    fn test_lines_reconstruct_text() {
        let text = "## Tomato, Onion & Pasta\n\n- tomato\n- onion\n- pasta\n\nSimmer gently.";
        assert_eq!(flatten(&layout_pages(text)).join("\n"), text);
    }

    #[test]
    fn test_keeps_indentation() {
        assert_eq!(flatten(&layout_pages("  - pinch of salt")), vec!["  - pinch of salt"]);
    }

    #[test]
    fn test_empty_text_gives_blank_page() {
        assert_eq!(layout_pages(""), vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_charset_replacements() {
        assert_eq!(to_pdf_charset("Chef\u{2019}s \u{201C}best\u{201D} \u{2013} 200\u{00B0}C"), "Chef's \"best\" - 200\u{00B0}C");
        assert_eq!(to_pdf_charset("\u{1F345} soup"), "? soup");
    }
}
