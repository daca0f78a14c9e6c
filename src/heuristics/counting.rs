/*!
Tallies over clauses, for the counting heuristics.

Each function takes a collection of clauses (typically the residual formula) and returns a [Tally], scoring each atom occurring in the clauses.

- [two_clause]: occurrences in clauses of length two.
- [occurrences]: occurrences in any clause (MAXO).
- [moms]: occurrences in clauses of minimum length.
- [mams]: the sum of [occurrences] and [moms].
- [jw]: the sum of 2^-*length* over each clause containing the atom (Jeroslow-Wang).

A tally remembers the order in which atoms were first seen, and ties are broken with this order.
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// Scores for atoms, together with the order in which atoms were first seen.
pub struct Tally {
    order: Vec<Atom>,
    scores: Vec<f64>,
    seen: Vec<bool>,
}

impl Tally {
    pub fn new(atom_count: Atom) -> Self {
        Tally {
            order: Vec::default(),
            scores: vec![0.0; atom_count as usize + 1],
            seen: vec![false; atom_count as usize + 1],
        }
    }

    /// Adds `amount` to the score of `atom`.
    pub fn add(&mut self, atom: Atom, amount: f64) {
        let index = atom as usize;
        if index >= self.scores.len() {
            self.scores.resize(index + 1, 0.0);
            self.seen.resize(index + 1, false);
        }
        if !self.seen[index] {
            self.seen[index] = true;
            self.order.push(atom);
        }
        self.scores[index] += amount;
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn score(&self, atom: Atom) -> f64 {
        self.scores.get(atom as usize).copied().unwrap_or(0.0)
    }

    /// Atoms with a score, in the order first seen.
    pub fn atoms(&self) -> &[Atom] {
        &self.order
    }

    /// The first seen atom with the highest score.
    pub fn best(&self) -> Option<Atom> {
        let mut best: Option<Atom> = None;
        for atom in &self.order {
            match best {
                Some(current) if self.score(current) >= self.score(*atom) => {}
                _ => best = Some(*atom),
            }
        }
        best
    }

    /// Every atom with the highest score, in the order first seen.
    pub fn maxima(&self) -> Vec<Atom> {
        let max = match self.best() {
            Some(atom) => self.score(atom),
            None => return Vec::default(),
        };
        self.order
            .iter()
            .copied()
            .filter(|atom| self.score(*atom) == max)
            .collect()
    }

    /// The (at most) `k` highest scoring atoms, ties to the first seen.
    pub fn top(&self, k: usize) -> Vec<Atom> {
        let mut atoms = self.order.clone();
        atoms.sort_by(|a, b| self.score(*b).total_cmp(&self.score(*a)));
        atoms.truncate(k);
        atoms
    }
}

/// Occurrences of atoms in clauses of length two.
pub fn two_clause(clauses: &[Vec<CLiteral>], atom_count: Atom) -> Tally {
    let mut tally = Tally::new(atom_count);
    for clause in clauses.iter().filter(|clause| clause.len() == 2) {
        for literal in clause {
            tally.add(literal.atom(), 1.0);
        }
    }
    tally
}

/// Occurrences of atoms in any clause.
pub fn occurrences(clauses: &[Vec<CLiteral>], atom_count: Atom) -> Tally {
    let mut tally = Tally::new(atom_count);
    for clause in clauses {
        for literal in clause {
            tally.add(literal.atom(), 1.0);
        }
    }
    tally
}

/// Occurrences of atoms in clauses of minimum length.
pub fn moms(clauses: &[Vec<CLiteral>], atom_count: Atom) -> Tally {
    let mut tally = Tally::new(atom_count);
    let Some(minimum) = clauses.iter().map(|clause| clause.len()).min() else {
        return tally;
    };
    for clause in clauses.iter().filter(|clause| clause.len() == minimum) {
        for literal in clause {
            tally.add(literal.atom(), 1.0);
        }
    }
    tally
}

/// The sum of [occurrences] and [moms], in the order of [occurrences].
pub fn mams(clauses: &[Vec<CLiteral>], atom_count: Atom) -> Tally {
    let mut tally = occurrences(clauses, atom_count);
    let minimum = moms(clauses, atom_count);
    for atom in minimum.atoms() {
        tally.add(*atom, minimum.score(*atom));
    }
    tally
}

/// Jeroslow-Wang scores.
pub fn jw(clauses: &[Vec<CLiteral>], atom_count: Atom) -> Tally {
    let mut tally = Tally::new(atom_count);
    for clause in clauses {
        let weight = (-(clause.len() as f64)).exp2();
        for literal in clause {
            tally.add(literal.atom(), weight);
        }
    }
    tally
}

/// Jeroslow-Wang scores for every atom, indexed by atom.
pub fn jw_scores<'c>(clauses: impl Iterator<Item = &'c [CLiteral]>, atom_count: Atom) -> Vec<f64> {
    let mut scores = vec![0.0; atom_count as usize + 1];
    for clause in clauses {
        let weight = (-(clause.len() as f64)).exp2();
        for literal in clause {
            scores[literal.atom() as usize] += weight;
        }
    }
    scores
}
