//! Row assembly for the ASCII graph
//!
//! Turns one node's [`ColData`](super::layout::ColData) plus its label
//! lines into finished text rows: the nodeline holding the glyph, the
//! interline connecting it to the next node, and whatever padding or
//! filler the label length demands.

use crate::artifacts::graph::layout::ColData;

/// The two values carried between consecutive nodes of one render pass:
/// the previous node's column delta and column. Consumed only by the
/// nodeline-tail shortcut.
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    prev_coldiff: isize,
    prev_col: usize,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Render one node's rows and append them to `rows`.
///
/// `label` is the node's text, one entry per output row; the graph grows
/// blank connector rows or extra interlines until the two match. In
/// verbose mode every node gets its full two-row footprint even when the
/// label is a single line.
pub fn render_node(
    rows: &mut Vec<String>,
    state: &mut RenderState,
    glyph: char,
    label: &[String],
    coldata: &ColData,
    verbose: bool,
) {
    let ColData {
        col,
        ncols,
        coldiff,
        ..
    } = *coldata;
    let mut edges = coldata.edges.clone();
    let mut text = label.to_vec();

    if coldiff == -1 {
        // Transform
        //
        //     | | |        | | |
        //     o | |  into  o---+
        //     |X /         |/ /
        //     | |          | |
        fix_long_right_edges(&mut edges);
    }

    // add_padding_line says whether to rewrite
    //
    //     | | | |        | | | |
    //     | o---+  into  | o---+
    //     |  / /         |   | |  <- padding line
    //     o | |          |  / /
    //                    o | |
    let add_padding_line = text.len() > 2
        && coldiff == -1
        && edges.iter().any(|&(x, y)| x + 1 < y)
        && verbose;

    // fix_nodeline_tail says whether to rewrite
    //
    //     | | o | |        | | o | |
    //     | | |/ /         | | |/ /
    //     | o | |    into  | o / /   <- fixed nodeline tail
    //     | |/ /           | |/ /
    //     o | |            o | |
    let fix_nodeline_tail = text.len() <= 2 && !add_padding_line;

    let mut nodeline = bars(col);
    nodeline.push(glyph);
    nodeline.push(' ');
    nodeline.extend(nodeline_tail(
        col,
        state.prev_col,
        ncols,
        coldiff,
        state.prev_coldiff,
        fix_nodeline_tail,
    ));

    // the interline carries the non-vertical edges over to the next node
    let mut interline = bars(col);
    let (n_spaces, edge_glyph) = match coldiff {
        -1 => (1, '/'),
        0 => (2, '|'),
        _ => (3, '\\'),
    };
    interline.extend(std::iter::repeat_n(' ', n_spaces));
    for _ in 0..ncols.saturating_sub(col + 1) {
        interline.push(edge_glyph);
        interline.push(' ');
    }

    draw_edges(&edges, &mut nodeline, &mut interline);

    let mut lines = vec![nodeline];
    if add_padding_line {
        lines.push(padding_line(col, ncols, &edges));
    }
    lines.push(interline);

    // balance graph rows against label lines
    if verbose || lines.iter().any(|line| line.contains(&'/')) {
        while text.len() < lines.len() {
            text.push(String::new());
        }
    }
    if lines.len() < text.len() {
        let filler = bars((ncols as isize + coldiff) as usize);
        while lines.len() < text.len() {
            lines.push(filler.clone());
        }
    }

    let width = 2 * ncols.max((ncols as isize + coldiff) as usize);
    for (line, logstr) in lines.iter().zip(text.iter()) {
        let drawn: String = line.iter().collect();
        let row = format!("{drawn:<width$} {logstr}");
        rows.push(row.trim_end().to_string());
    }

    state.prev_coldiff = coldiff;
    state.prev_col = col;
}

/// A diagonal may never span more than one column within a single row;
/// stretching the edge one column right keeps the bend on the interline.
fn fix_long_right_edges(edges: &mut [(usize, usize)]) {
    for edge in edges.iter_mut() {
        if edge.1 > edge.0 {
            edge.1 += 1;
        }
    }
}

/// The columns drawn after the node glyph. Straight bars by default; when
/// two consecutive nodes shift the columns in the same non-vertical
/// direction, the tail continues the previous row's diagonals instead.
fn nodeline_tail(
    col: usize,
    prev_col: usize,
    ncols: usize,
    coldiff: isize,
    prev_coldiff: isize,
    fix_tail: bool,
) -> Vec<char> {
    if fix_tail && coldiff == prev_coldiff && coldiff != 0 {
        if coldiff == -1 {
            // columns left of the previous node's column are untouched and
            // stay vertical; the rest slope inward
            let start = (col + 1).max(prev_col);
            let mut tail = glyph_pairs('|', start.saturating_sub(col + 1));
            tail.extend(glyph_pairs('/', ncols.saturating_sub(start)));
            tail
        } else {
            glyph_pairs('\\', ncols.saturating_sub(col + 1))
        }
    } else {
        glyph_pairs('|', ncols.saturating_sub(col + 1))
    }
}

/// Mark the parent connectors into the finished rows. Neighbouring columns
/// get a diagonal on the interline, the same column a bar, and a distant
/// column a horizontal `+`-terminated run on the nodeline.
fn draw_edges(edges: &[(usize, usize)], nodeline: &mut [char], interline: &mut [char]) {
    for &(start, end) in edges {
        if start == end + 1 {
            interline[2 * end + 1] = '/';
        } else if start + 1 == end {
            interline[2 * start + 1] = '\\';
        } else if start == end {
            interline[2 * start] = '|';
        } else {
            nodeline[2 * end] = '+';
            let (lo, hi) = if start > end { (end, start) } else { (start, end) };
            for cell in nodeline.iter_mut().take(2 * hi).skip(2 * lo + 1) {
                if *cell != '+' {
                    *cell = '-';
                }
            }
        }
    }
}

/// The blank row inserted under a multi-column merge so the bend has room;
/// the node's own column keeps its bar only when an edge continues there.
fn padding_line(col: usize, ncols: usize, edges: &[(usize, usize)]) -> Vec<char> {
    let mut line = bars(col);
    let continues = (col > 0 && edges.contains(&(col, col - 1))) || edges.contains(&(col, col));
    line.push(if continues { '|' } else { ' ' });
    line.push(' ');
    line.extend(bars(ncols.saturating_sub(col + 1)));
    line
}

fn bars(n: usize) -> Vec<char> {
    glyph_pairs('|', n)
}

fn glyph_pairs(glyph: char, n: usize) -> Vec<char> {
    let mut pairs = Vec::with_capacity(2 * n);
    for _ in 0..n {
        pairs.push(glyph);
        pairs.push(' ');
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::graph::layout::ColumnTracker;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn render_pass(
        visits: &[(u64, Vec<u64>, char, &str)],
        verbose: bool,
    ) -> Vec<String> {
        let mut tracker = ColumnTracker::new();
        let mut state = RenderState::new();
        let mut rows = Vec::new();
        for (rev, parents, glyph, label) in visits {
            let coldata = tracker.advance(*rev, parents).expect("layout holds");
            render_node(
                &mut rows,
                &mut state,
                *glyph,
                &[label.to_string()],
                &coldata,
                verbose,
            );
        }
        rows
    }

    #[rstest]
    fn a_linear_chain_renders_one_row_per_node() {
        let rows = render_pass(
            &[
                (2, vec![1], 'o', "[2]"),
                (1, vec![0], '@', "[1]"),
                (0, vec![], 'o', "[0]"),
            ],
            false,
        );

        assert_eq!(rows, vec!["o  [2]", "@  [1]", "o  [0]"]);
    }

    #[rstest]
    fn verbose_mode_adds_connector_rows_between_nodes() {
        let rows = render_pass(
            &[
                (2, vec![1], 'o', "[2]"),
                (1, vec![0], '@', "[1]"),
                (0, vec![], 'o', "[0]"),
            ],
            true,
        );

        assert_eq!(
            rows,
            vec!["o  [2]", "|", "@  [1]", "|", "o  [0]", ""]
        );
    }

    #[rstest]
    fn a_branch_opens_a_second_column_and_merges_back() {
        // node 1 has children 2 and 3
        let rows = render_pass(
            &[
                (3, vec![1], 'o', "[3]"),
                (2, vec![1], 'o', "[2]"),
                (1, vec![0], '@', "[1]"),
                (0, vec![], 'o', "[0]"),
            ],
            false,
        );

        assert_eq!(
            rows,
            vec!["o  [3]", "| o  [2]", "|/", "@  [1]", "o  [0]"]
        );
    }

    #[rstest]
    fn deep_forks_continue_diagonals_across_consecutive_merges() {
        // four open columns collapse one per step; from the second merge
        // on, the nodeline tail keeps sloping instead of going vertical
        let rows = render_pass(
            &[
                (9, vec![5], 'o', "[9]"),
                (8, vec![4], 'o', "[8]"),
                (7, vec![3], 'o', "[7]"),
                (6, vec![2], 'o', "[6]"),
                (5, vec![4], 'o', "[5]"),
                (4, vec![3], 'o', "[4]"),
                (3, vec![2], 'o', "[3]"),
                (2, vec![1], 'o', "[2]"),
                (1, vec![0], '@', "[1]"),
                (0, vec![], 'o', "[0]"),
            ],
            false,
        );

        assert_eq!(
            rows,
            vec![
                "o  [9]",
                "| o  [8]",
                "| | o  [7]",
                "| | | o  [6]",
                "o | | |  [5]",
                "|/ / /",
                "o / /  [4]",
                "|/ /",
                "o /  [3]",
                "|/",
                "o  [2]",
                "@  [1]",
                "o  [0]",
            ]
        );
    }

    #[rstest]
    fn a_distant_parent_draws_a_horizontal_run_on_the_nodeline() {
        // node 2 sits in column 0 while its parent 1 is open two columns
        // to the right: the connector is stretched one further column so
        // the bend lands on the interline diagonals
        let rows = render_pass(
            &[
                (9, vec![2], 'o', "[9]"),
                (8, vec![4], 'o', "[8]"),
                (7, vec![1], 'o', "[7]"),
                (4, vec![0], 'o', "[4]"),
                (2, vec![1], 'o', "[2]"),
                (1, vec![0], 'o', "[1]"),
                (0, vec![], 'o', "[0]"),
            ],
            false,
        );

        assert_eq!(
            rows,
            vec![
                "o  [9]",
                "| o  [8]",
                "| | o  [7]",
                "| o |  [4]",
                "o---+  [2]",
                " / /",
                "| o  [1]",
                "|/",
                "o  [0]",
            ]
        );
    }

    #[rstest]
    fn long_labels_get_a_padding_line_under_a_wide_merge() {
        // same distant-parent shape, verbose, with a three-line label on
        // the merging node: the bend gets a padding row before the
        // diagonals so the extra label lines have graph rows to sit next to
        let visits: [(u64, Vec<u64>, Vec<&str>); 7] = [
            (9, vec![2], vec!["[9]"]),
            (8, vec![4], vec!["[8]"]),
            (7, vec![1], vec!["[7]"]),
            (4, vec![0], vec!["[4]"]),
            (2, vec![1], vec!["[2]", "a", "b"]),
            (1, vec![0], vec!["[1]"]),
            (0, vec![], vec!["[0]"]),
        ];

        let mut tracker = ColumnTracker::new();
        let mut state = RenderState::new();
        let mut rows = Vec::new();
        for (rev, parents, label) in &visits {
            let label: Vec<String> = label.iter().map(|l| l.to_string()).collect();
            let coldata = tracker.advance(*rev, parents).expect("layout holds");
            render_node(&mut rows, &mut state, 'o', &label, &coldata, true);
        }

        assert_eq!(
            rows,
            vec![
                "o  [9]",
                "|",
                "| o  [8]",
                "| |",
                "| | o  [7]",
                "| | |",
                "| o |  [4]",
                "| | |",
                "o---+  [2]",
                "  | |  a",
                " / /   b",
                "| o  [1]",
                "|/",
                "o  [0]",
                "",
            ]
        );
    }

    #[rstest]
    fn rendering_is_deterministic() {
        let visits = [
            (3, vec![1], 'o', "[3]"),
            (2, vec![1], 'o', "[2]"),
            (1, vec![0], '@', "[1]"),
            (0, vec![], 'o', "[0]"),
        ];
        assert_eq!(render_pass(&visits, true), render_pass(&visits, true));
        assert_eq!(render_pass(&visits, false), render_pass(&visits, false));
    }
}
