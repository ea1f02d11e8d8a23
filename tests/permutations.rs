use chessboard::chess::layout::PieceLayout;
use chessboard::search::permutations::Permutations;
use chessboard::{PieceCensus, PieceKind};

fn layout(census: PieceCensus) -> PieceLayout {
    PieceLayout::from_census(&census)
}

fn drain(gen: &mut Permutations) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    while let Some(p) = gen.try_next() {
        out.push(p.to_vec());
    }
    out
}

/// Drive `gen`, skipping at the first level where `reject(prefix)` holds.
///
/// Returns every permutation drawn and the ones that passed all levels.
fn drive(
    gen: &mut Permutations,
    reject: impl Fn(&[usize]) -> bool,
) -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
    let mut drawn = Vec::new();
    let mut accepted = Vec::new();
    while let Some(p) = gen.try_next() {
        let p = p.to_vec();
        drawn.push(p.clone());
        match (0..p.len()).find(|&level| reject(&p[..=level])) {
            Some(level) => gen.skip_branch(level),
            None => accepted.push(p),
        }
    }
    (drawn, accepted)
}

#[test]
fn distinct_kinds_give_the_cartesian_product() {
    let census = PieceCensus::new().with_queens(1).with_rooks(1).with_bishops(1);
    let mut gen = Permutations::new(&layout(census), 3);
    assert_eq!(
        gen.kinds(),
        &[PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop]
    );

    let mut expected = Vec::new();
    for a in 0..3 {
        for b in 0..3 {
            for c in 0..3 {
                expected.push(vec![a, b, c]);
            }
        }
    }
    assert_eq!(drain(&mut gen), expected);
}

#[test]
fn skipping_a_branch_drops_exactly_that_subtree() {
    // Queen, Rook, Bishop, Bishop over 5 squares; every prefix with the rook on 2 is rejected.
    let census = PieceCensus::new().with_queens(1).with_rooks(1).with_bishops(2);
    let mut gen = Permutations::new(&layout(census), 5);

    let (_, accepted) = drive(&mut gen, |prefix| prefix.len() == 2 && prefix[1] == 2);

    let mut expected = Vec::new();
    for q in 0..5 {
        for r in (0..5).filter(|&r| r != 2) {
            for b1 in 0..5 {
                for b2 in b1..5 {
                    expected.push(vec![q, r, b1, b2]);
                }
            }
        }
    }
    assert_eq!(expected.len(), 5 * 4 * 15);
    assert_eq!(accepted, expected);
}

#[test]
fn skips_never_repeat_and_never_lose_siblings() {
    let census = PieceCensus::new().with_queens(2).with_knights(2).with_kings(1);
    let lay = layout(census);
    let range = 4;

    let reject = |prefix: &[usize]| {
        let h = prefix
            .iter()
            .enumerate()
            .fold(prefix.len() * 3, |acc, (i, &v)| acc * 7 + v * (i + 2));
        h % 5 == 0
    };

    let mut gen = Permutations::new(&lay, range);
    let (drawn, accepted) = drive(&mut gen, reject);

    // Strictly increasing, so nothing is drawn twice.
    assert!(drawn.windows(2).all(|w| w[0] < w[1]));

    // Same survivors as checking every canonical permutation in full.
    let all = drain(&mut Permutations::new(&lay, range));
    let survivors: Vec<Vec<usize>> = all
        .into_iter()
        .filter(|p| (0..p.len()).all(|level| !reject(&p[..=level])))
        .collect();
    assert!(!survivors.is_empty());
    assert_eq!(accepted, survivors);
    assert!(drawn.len() < drain(&mut Permutations::new(&lay, range)).len());
}

#[test]
fn identical_runs_stay_non_decreasing() {
    let census = PieceCensus::new().with_rooks(3).with_knights(2);
    let lay = layout(census);
    let all = drain(&mut Permutations::new(&lay, 4));

    for p in &all {
        for run in lay.identical_runs() {
            assert!(p[run.clone()].windows(2).all(|w| w[0] <= w[1]));
        }
    }
    // C(4 + 3 - 1, 3) * C(4 + 2 - 1, 2)
    assert_eq!(all.len(), 20 * 10);
    assert_eq!(all.last().unwrap(), &vec![3; 5]);
}

#[test]
fn skip_before_first_draw_is_ignored() {
    let census = PieceCensus::new().with_kings(2);
    let mut gen = Permutations::new(&layout(census), 2);
    gen.skip_branch(0);
    assert_eq!(drain(&mut gen), vec![vec![0, 0], vec![0, 1], vec![1, 1]]);
}
