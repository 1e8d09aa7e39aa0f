mod common;

use approx::assert_relative_eq;
use bayesian_golf::{
    config::ScoringConfig,
    data::loader::load_submissions,
    model::{
        advancement::AdvancementSolver,
        leaderboard::ScoringModel,
        structures::{
            advancement::Advancement, blended_expectation::BlendedExpectation, popularity_basis::PopularityBasis,
            tie_ranking::TieRanking
        }
    },
    utils::test_utils::{generate_submission, generate_submissions}
};
use common::{init_test_env, write_dump};

#[test]
fn test_equal_costs_blend_to_the_record() {
    init_test_env();

    // a: {10, 12} on p and also solves q, b: {10} on p only
    let submissions = vec![
        generate_submission("p", "u1", "a", 10, 0),
        generate_submission("p", "u2", "a", 12, 1),
        generate_submission("q", "u1", "a", 25, 2),
        generate_submission("p", "u3", "b", 10, 3),
    ];
    let model = ScoringModel::new(&submissions, ScoringConfig::default()).unwrap();
    let report = model.process(&model.baseline()).unwrap();

    let p = &report.puzzles["p"];
    let u1 = p.iter().find(|r| r.user_id == "u1").unwrap();
    let u3 = p.iter().find(|r| r.user_id == "u3").unwrap();

    assert_relative_eq!(u1.sb, 10.0, max_relative = 1e-12);
    assert_relative_eq!(u3.sb, 10.0, max_relative = 1e-12);
    assert_relative_eq!(u1.m, 3.0);
    assert_relative_eq!(u3.m, 2.0);
    assert_eq!(u1.new_rank, 1);
    assert_eq!(u3.new_rank, 1);
}

#[test]
fn test_rare_language_is_pulled_toward_the_record() {
    init_test_env();

    let submissions = vec![
        generate_submission("p", "u1", "a", 10, 0),
        generate_submission("q", "u1", "a", 10, 0),
        generate_submission("p", "u2", "b", 20, 0),
    ];
    let model = ScoringModel::new(&submissions, ScoringConfig::default()).unwrap();
    let report = model.process(&model.baseline()).unwrap();

    let u2 = report.puzzles["p"].iter().find(|r| r.user_id == "u2").unwrap();

    assert_relative_eq!(u2.sb, 40.0 / 3.0, max_relative = 1e-12);
    assert_relative_eq!(u2.new_score, 2000.0 / 3.0, max_relative = 1e-12);
    assert_eq!(u2.new_rank, 2);
    // Record holder: 1000 * 10 * 2 / (1000 * 3 - 1000) = 10
    assert_eq!(u2.to_rank_up, Some(Advancement::Strokes(10)));
}

#[test]
fn test_generated_report_properties() {
    init_test_env();

    let config = ScoringConfig::default();
    let solver = AdvancementSolver::new(&config);
    let model = ScoringModel::new(&generate_submissions(120, 15, 7, 2024), config).unwrap();
    let report = model.process(&model.baseline()).unwrap();

    assert!(report.overall.windows(2).all(|w| w[0].total_score >= w[1].total_score));
    assert!(report.overall.windows(2).all(|w| w[0].total_rank <= w[1].total_rank));

    for rows in report.puzzles.values() {
        assert!(rows.windows(2).all(|w| w[0].new_score >= w[1].new_score));

        for (i, row) in rows.iter().enumerate() {
            assert!(row.sa as f64 <= row.sb + 1e-9 && row.sb <= row.s as f64 + 1e-9);

            let Some(Advancement::Strokes(strokes)) = row.to_rank_up else {
                continue;
            };
            let target = rows[..i]
                .iter()
                .rev()
                .find(|r| r.new_rank < row.new_rank)
                .unwrap()
                .new_score;
            let expectation = BlendedExpectation::new(row.n, row.m, row.s, row.sa);

            assert!(strokes < row.cost);
            assert!(solver.achieved_score(&expectation, strokes) >= target * (1.0 - 1e-9));
        }
    }
}

#[test]
fn test_competition_ranking_leaves_gaps() {
    init_test_env();

    let submissions = vec![
        generate_submission("p", "u1", "a", 10, 0),
        generate_submission("p", "u2", "a", 12, 1),
        generate_submission("p", "u3", "a", 12, 2),
        generate_submission("p", "u4", "a", 15, 3),
    ];
    let config = ScoringConfig {
        tie_ranking: TieRanking::Competition,
        ..ScoringConfig::default()
    };
    let model = ScoringModel::new(&submissions, config).unwrap();
    let rows = model.puzzle_leaderboard("p", &model.baseline()).unwrap();

    let ranks: Vec<u32> = rows.iter().map(|r| r.new_rank).collect();
    assert_eq!(ranks, vec![1, 2, 2, 4]);
    // u4 walks past the missing rank 3 and targets the 12-stroke score
    assert_eq!(rows[3].to_rank_up, Some(Advancement::Strokes(12)));
}

#[test]
fn test_popularity_basis_changes_prior_strength() {
    init_test_env();

    // a solves two puzzles once each, b solves one puzzle three times
    let submissions = vec![
        generate_submission("p", "u1", "a", 10, 0),
        generate_submission("q", "u1", "a", 10, 0),
        generate_submission("p", "u2", "b", 10, 0),
        generate_submission("p", "u3", "b", 11, 0),
        generate_submission("p", "u4", "b", 12, 0),
    ];

    let breadth = ScoringModel::new(&submissions, ScoringConfig::default()).unwrap();
    let solutions = ScoringModel::new(&submissions, ScoringConfig {
        popularity_basis: PopularityBasis::Solutions,
        ..ScoringConfig::default()
    })
    .unwrap();

    let m_b = |model: &ScoringModel| {
        model.puzzle_leaderboard("p", &model.baseline()).unwrap()
            .iter()
            .find(|r| r.language_id == "b")
            .unwrap()
            .m
    };

    assert_relative_eq!(m_b(&breadth), 2.0);
    assert_relative_eq!(m_b(&solutions), 3.0);
}

#[test]
fn test_duplicates_in_the_dump_are_ignored() {
    init_test_env();

    let submissions = generate_submissions(30, 5, 3, 9);
    let mut with_duplicates = submissions.clone();
    for s in submissions.iter().step_by(3) {
        let mut worse = s.clone();
        worse.cost += 7;
        with_duplicates.push(worse);
    }

    let clean_path = write_dump("clean.json", &submissions);
    let dirty_path = write_dump("dirty.json", &with_duplicates);
    let clean = load_submissions(&clean_path).unwrap();
    let dirty = load_submissions(&dirty_path).unwrap();
    std::fs::remove_file(&clean_path).unwrap();
    std::fs::remove_file(&dirty_path).unwrap();

    let a = ScoringModel::new(&clean, ScoringConfig::default()).unwrap();
    let b = ScoringModel::new(&dirty, ScoringConfig::default()).unwrap();

    assert_eq!(a.process(&a.baseline()).unwrap(), b.process(&b.baseline()).unwrap());
}
