use std::fmt;

/// A domino with two pip values.  The pair is unordered for matching purposes,
/// but the stored order is kept so that layouts are reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Domino(pub u32, pub u32);

impl Domino {
    pub fn new(side1: u32, side2: u32) -> Domino {
        Domino(side1, side2)
    }

    pub fn side1(&self) -> u32 {
        self.0
    }

    pub fn side2(&self) -> u32 {
        self.1
    }

    /// Does this domino cover the two cells with pips `p` and `q`, in either
    /// orientation?
    pub fn matches(&self, p: u32, q: u32) -> bool {
        (self.0 == p && self.1 == q) || (self.0 == q && self.1 == p)
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.0, self.1)
    }
}

/// Number of dominoes in a complete set with pips `0..=max_pips`.
pub fn set_size(max_pips: u32) -> usize {
    let n = max_pips as usize + 1;
    n * (n + 1) / 2
}

/// Generate the complete domino set for pips `0..=max_pips`, in ascending
/// order, each unordered pair exactly once with `side1 <= side2`.
pub fn generate(max_pips: u32) -> Vec<Domino> {
    let mut dominoes = Vec::with_capacity(set_size(max_pips));
    for i in 0..=max_pips {
        for j in i..=max_pips {
            dominoes.push(Domino(i, j));
        }
    }
    dominoes
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generate_count() {
        assert_eq!(generate(6).len(), 28);
        assert_eq!(generate(5).len(), 21);
        assert_eq!(generate(0), vec![Domino(0, 0)]);
        for max_pips in 0..10 {
            let n = max_pips as usize;
            assert_eq!(generate(max_pips).len(), (n + 1) * (n + 2) / 2);
            assert_eq!(set_size(max_pips), (n + 1) * (n + 2) / 2);
        }
    }

    #[test]
    fn test_generate_no_duplicates() {
        for max_pips in 0..8 {
            let dominoes = generate(max_pips);
            let pairs: HashSet<(u32, u32)> = dominoes
                .iter()
                .map(|d| (d.0.min(d.1), d.0.max(d.1)))
                .collect();
            assert_eq!(pairs.len(), dominoes.len());
            assert!(dominoes.iter().all(|d| d.side1() <= d.side2() && d.side2() <= max_pips));
        }
    }

    #[test]
    fn test_generate_order() {
        let dominoes = generate(2);
        assert_eq!(
            dominoes,
            vec![
                Domino(0, 0),
                Domino(0, 1),
                Domino(0, 2),
                Domino(1, 1),
                Domino(1, 2),
                Domino(2, 2)
            ]
        );
        assert!(dominoes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_matches() {
        let d = Domino::new(1, 2);
        assert!(d.matches(1, 2));
        assert!(d.matches(2, 1));
        assert!(!d.matches(1, 3));
        assert!(!d.matches(1, 1));
        assert_eq!(d.to_string(), "[1|2]");
    }
}
