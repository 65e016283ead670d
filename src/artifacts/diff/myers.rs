use derive_new::new;

/// One step of an edit script aligning two sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete(T),
    Insert(T),
    Equal(T),
}

/// Myers' shortest-edit-script diff over two slices.
///
/// Produces the full alignment of `a` and `b`: every element of `a` shows
/// up as `Delete` or `Equal`, every element of `b` as `Insert` or `Equal`,
/// in order.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq + Clone> MyersDiff<'_, T> {
    pub fn edit_script(&self) -> Vec<Edit<T>> {
        let mut script = Vec::new();

        for (prev_x, prev_y, x, y) in self.backtrack() {
            if x == prev_x {
                // only y advanced: insertion
                if prev_y < self.b.len() as isize {
                    script.push(Edit::Insert(self.b[prev_y as usize].clone()));
                }
            } else if y == prev_y {
                // only x advanced: deletion
                if prev_x < self.a.len() as isize {
                    script.push(Edit::Delete(self.a[prev_x as usize].clone()));
                }
            } else if prev_x < self.a.len() as isize {
                // diagonal move: both sides kept the element
                script.push(Edit::Equal(self.a[prev_x as usize].clone()));
            }
        }

        script.reverse();
        script
    }

    /// Breadth-first sweep over edit distances, recording the furthest x
    /// reached on every diagonal after each round.
    fn shortest_edit_trace(&self) -> Vec<Vec<isize>> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;

        let mut v = vec![0isize; 2 * offset + 1];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d {
                    // only reachable from k+1: an insertion
                    v[idx + 1]
                } else if k == d {
                    // only reachable from k-1: a deletion
                    v[idx - 1] + 1
                } else {
                    // take whichever of k-1 / k+1 got further
                    (v[idx - 1] + 1).max(v[idx + 1])
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    /// Walks the trace backwards from `(n, m)`, yielding the moves of the
    /// shortest path in reverse order as `(prev_x, prev_y, x, y)`.
    fn backtrack(&self) -> Vec<(isize, isize, isize, isize)> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        if x == 0 && y == 0 {
            return Vec::new();
        }

        let offset = (x + y) as usize;
        let mut path = Vec::new();

        for (d, v) in self.shortest_edit_trace().iter().enumerate().rev() {
            let k = x - y;

            let prev_k = if k == -(d as isize) {
                k + 1
            } else if k == d as isize {
                k - 1
            } else {
                let x_del = v[(offset as isize + k - 1) as usize] + 1;
                let x_ins = v[(offset as isize + k + 1) as usize];
                if x_del > x_ins { k - 1 } else { k + 1 }
            };

            let prev_x = v[(offset as isize + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        path
    }
}
