mod common;

use cdcl_sat::{
    config::{Config, Heuristic, Propagation},
    context::{Context, ContextState},
    reports::Report,
    structures::{clause::Clause, literal::CLiteral},
    types::err::{self, ErrorKind},
};

mod scenarios {
    use super::*;

    #[test]
    fn forced_contradiction() {
        let clauses = vec![vec![1, 2], vec![-1, 2], vec![-2]];
        let mut the_context = Context::from_clauses(Config::default(), 2, &clauses).unwrap();
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(the_context.state, ContextState::Unsatisfiable);
    }

    #[test]
    fn one_literal() {
        let mut the_context = Context::from_clauses(Config::default(), 1, &[vec![1]]).unwrap();
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.value_of(1), Some(true));
        assert_eq!(the_context.model(), Ok(vec![1]));
    }

    #[test]
    fn exactly_one() {
        for config in common::all_configs() {
            let clauses = vec![vec![1, 2], vec![-1, -2]];
            let mut the_context = Context::from_clauses(config, 2, &clauses).unwrap();
            assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

            let model = the_context.model().unwrap();
            assert!(model == vec![1, -2] || model == vec![-1, 2]);
        }
    }

    #[test]
    fn empty_formula() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.model(), Ok(vec![]));
        assert_eq!(the_context.valuation_string(), Ok(String::new()));
    }

    #[test]
    fn pigeonhole_learns() {
        for config in common::all_configs() {
            let (atoms, formula) = common::pigeonhole(3, 2);
            let (the_context, report, learnt) = common::solve_collecting(config, atoms, &formula);

            assert_eq!(report, Report::Unsatisfiable);
            assert!(!learnt.is_empty());
            assert_eq!(the_context.clause_db.learnt_clause_count(), learnt.len());
            assert!(the_context.counters.total_conflicts > 0);
        }
    }

    #[test]
    fn larger_pigeonhole() {
        let (atoms, formula) = common::pigeonhole(5, 4);
        for heuristic in [Heuristic::Ordered, Heuristic::CVSIDS, Heuristic::MVSIDS] {
            let config = common::config_with(heuristic, Propagation::Watched);
            let mut the_context = Context::from_clauses(config, atoms, &formula).unwrap();
            assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        }
    }
}

mod intake {
    use super::*;

    #[test]
    fn duplicates() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![1, 2, 2, 1]).is_ok());

        let clauses = the_context.clause_db.original_clauses().collect::<Vec<_>>();
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].literals().as_dimacs(true), "1 2 0");
    }

    #[test]
    fn tautology_skip() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.add_clause(vec![1, 2, -1]), Ok(None));
        assert_eq!(the_context.clause_db.total_clause_count(), 0);
        assert_eq!(the_context.atom_count(), 0);
    }

    #[test]
    fn empty_clause() {
        let mut the_context = Context::from_clauses(Config::default(), 2, &[vec![1, 2]]).unwrap();
        assert_eq!(the_context.add_clause(vec![]), Ok(None));
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn zero_literal() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.add_clause(vec![1, 0, 2]),
            Err(ErrorKind::from(err::ClauseDBError::ZeroLiteral))
        );
    }

    #[test]
    fn atoms_extend() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.fresh_atom(), Ok(1));
        assert!(the_context.add_clause(vec![-4]).is_ok());
        assert_eq!(the_context.atom_count(), 4);
        assert_eq!(the_context.fresh_atom(), Ok(5));
    }

    #[test]
    fn no_clauses_after_solve() {
        let mut the_context = Context::from_clauses(Config::default(), 1, &[vec![1]]).unwrap();
        assert!(the_context.solve().is_ok());
        assert_eq!(the_context.add_clause(vec![-1]), Err(ErrorKind::InvalidState));
    }

    #[test]
    fn unassigned_atoms_in_model() {
        let mut config = Config::default();
        config.pure_literals.value = false;

        let mut the_context = Context::from_clauses(config, 3, &[vec![1, 2]]).unwrap();
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let model = the_context.model().unwrap();
        assert_eq!(model.len(), 3);
        assert_eq!(model[2], 3);
        assert_eq!(the_context.validate_model(), Ok(true));
    }
}

mod dimacs {
    use super::*;

    #[test]
    fn unsatisfiable() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = b"c the four clauses on two atoms
p cnf 2 4
 1  2 0
-1  2 0
-1 -2 0
 1 -2 0
";
        let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
        assert_eq!(info.added_clauses, 4);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn satisfiable() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = b"
p cnf 4 3
 1  2  3 0
-1 -2 0
 3 -4
 0
";
        assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.validate_model(), Ok(true));
        assert_eq!(the_context.model().map(|model| model.len()), Ok(4));
    }

    #[test]
    fn malformed() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = b"p cnf 2 1\n1 two 0\n";
        assert_eq!(
            the_context.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::from(err::ParseError::Literal(2)))
        );
    }
}

mod callbacks {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn terminate_and_resume() {
        let (atoms, formula) = common::pigeonhole(4, 3);
        let mut the_context = Context::from_clauses(Config::default(), atoms, &formula).unwrap();

        the_context.set_callback_terminate(Box::new(|| true));
        assert_eq!(the_context.solve(), Ok(Report::Unknown));
        assert_eq!(the_context.state, ContextState::Solving);

        the_context.set_callback_terminate(Box::new(|| false));
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn time_limit() {
        let (atoms, formula) = common::pigeonhole(4, 3);
        let mut config = Config::default();
        config.time_limit = Some(std::time::Duration::ZERO);

        let mut the_context = Context::from_clauses(config, atoms, &formula).unwrap();
        assert_eq!(the_context.solve(), Ok(Report::Unknown));
    }

    #[test]
    fn phase() {
        let involved: Rc<RefCell<Vec<usize>>> = Rc::default();
        let involved_clone = involved.clone();

        let mut config = common::config_with(Heuristic::Ordered, Propagation::Watched);
        config.pure_literals.value = false;

        let clauses = vec![vec![1, 2], vec![-1, 3], vec![2, 3]];
        let mut the_context = Context::from_clauses(config, 3, &clauses).unwrap();
        the_context.set_callback_phase(Box::new(move |clauses: &[&[CLiteral]], _: u32| {
            involved_clone.borrow_mut().push(clauses.len());
            false
        }));

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.value_of(1), Some(false));
        assert_eq!(involved.borrow().first(), Some(&2));
        assert_eq!(the_context.validate_model(), Ok(true));
    }
}
