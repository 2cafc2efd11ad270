//! Rank and density fitness assignment.
//!
//! The pool is partitioned into Pareto fronts by repeated dominance sweeps
//! (front 0 = non-dominated set, front k = non-dominated after removing
//! fronts 0..k). Within each front a density credit is computed from two
//! normalized features of the objective-space neighborhood, and rank plus
//! credit collapse into the scalar fitness stored on each solution.
//!
//! # Complexity
//!
//! O(m * n²) for the front partition, O(k² * m + k log k * m) per front of
//! size k for the density features.

use super::config::ParetoGaConfig;
use crate::dominance::{self, Dominance};
use crate::error::Result;
use crate::solution::Solution;
use std::cmp::Ordering;

/// Assigns rank and scalar fitness to every solution in `pool`.
///
/// Ranks are front indices from the constraint-aware dominance sweep; the
/// scalar is `rank_weight * rank - density_credit`. Lower is better on
/// both counts. An empty pool is a no-op.
pub(crate) fn rank_and_score(pool: &mut [Solution], config: &ParetoGaConfig) -> Result<()> {
    if pool.is_empty() {
        return Ok(());
    }

    let fronts = partition_fronts(pool)?;
    for (rank, front) in fronts.iter().enumerate() {
        for &i in front {
            pool[i].set_rank(rank);
        }
    }

    for front in &fronts {
        let credits = density_credits(pool, front, config);
        for (&i, credit) in front.iter().zip(credits) {
            let fitness = config.rank_weight * pool[i].rank() as f64 - credit;
            pool[i].set_fitness(fitness);
        }
    }

    Ok(())
}

/// Fast non-dominated sort over the whole pool.
///
/// Returns the front partition as index lists; every pool index appears in
/// exactly one front.
pub(crate) fn partition_fronts(pool: &[Solution]) -> Result<Vec<Vec<usize>>> {
    let n = pool.len();
    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut front_0 = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance::compare(&pool[i], &pool[j])? {
                Dominance::First => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Second => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }
        // All pairs involving i have been seen once the inner loop ends.
        if domination_count[i] == 0 {
            front_0.push(i);
        }
    }

    let mut fronts = vec![front_0];
    loop {
        let current = fronts.last().expect("fronts starts with front_0");
        let mut next_front = Vec::new();

        for &i in current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    Ok(fronts)
}

/// Density credit for each member of one front, in front order.
///
/// Two features per member, both normalized to [0, 1] within the front:
/// the crowding distance (Deb et al., 2002 — the span of the gap the
/// member sits in) and the Euclidean nearest-neighbor distance (which
/// punishes near-duplicates harder than crowding does). Members extreme on
/// some objective receive the flat boundary credit instead, so the front's
/// ends are always preferred within their rank.
fn density_credits(pool: &[Solution], front: &[usize], config: &ParetoGaConfig) -> Vec<f64> {
    let k = front.len();
    let crowding = crowding_distances(pool, front);

    let nn = nearest_neighbor_distances(pool, front);
    let nn_max = nn.iter().cloned().fold(0.0f64, f64::max);

    let finite_max = crowding
        .iter()
        .cloned()
        .filter(|d| d.is_finite())
        .fold(0.0f64, f64::max);

    (0..k)
        .map(|idx| {
            if crowding[idx].is_infinite() {
                config.density_boundary_weight
            } else {
                let near = if nn_max > 0.0 { nn[idx] / nn_max } else { 0.0 };
                let far = if finite_max > 0.0 {
                    crowding[idx] / finite_max
                } else {
                    0.0
                };
                config.density_near_weight * near + config.density_far_weight * far
            }
        })
        .collect()
}

/// Crowding distance per front member (Deb et al., 2002), in front order.
///
/// Boundary members on any objective get infinity; fronts of one or two
/// members are all boundary.
fn crowding_distances(pool: &[Solution], front: &[usize]) -> Vec<f64> {
    let k = front.len();
    if k <= 2 {
        return vec![f64::INFINITY; k];
    }

    let m = pool[front[0]].objectives().len();
    let mut distances = vec![0.0f64; k];

    for obj in 0..m {
        let mut order: Vec<usize> = (0..k).collect();
        order.sort_by(|&a, &b| {
            pool[front[a]].objectives()[obj]
                .partial_cmp(&pool[front[b]].objectives()[obj])
                .unwrap_or(Ordering::Equal)
        });

        distances[order[0]] = f64::INFINITY;
        distances[order[k - 1]] = f64::INFINITY;

        let min_val = pool[front[order[0]]].objectives()[obj];
        let max_val = pool[front[order[k - 1]]].objectives()[obj];
        let range = max_val - min_val;
        if range > 0.0 {
            for pos in 1..(k - 1) {
                let prev = pool[front[order[pos - 1]]].objectives()[obj];
                let next = pool[front[order[pos + 1]]].objectives()[obj];
                distances[order[pos]] += (next - prev) / (range * m as f64);
            }
        }
    }

    distances
}

/// Euclidean nearest-neighbor distance in objective space per front
/// member, in front order. Singleton fronts get 0.
fn nearest_neighbor_distances(pool: &[Solution], front: &[usize]) -> Vec<f64> {
    let k = front.len();
    if k < 2 {
        return vec![0.0; k];
    }

    (0..k)
        .map(|a| {
            (0..k)
                .filter(|&b| b != a)
                .map(|b| euclidean(pool[front[a]].objectives(), pool[front[b]].objectives()))
                .fold(f64::INFINITY, f64::min)
        })
        .collect()
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn evaluated(objectives: &[f64]) -> Solution {
        let mut s = Solution::new(vec![0.0]);
        s.set_objectives(objectives.to_vec());
        s
    }

    fn config() -> ParetoGaConfig {
        ParetoGaConfig::default()
    }

    // ---- Front partition ----

    #[test]
    fn test_partition_mixed_fronts() {
        let pool = vec![
            evaluated(&[1.0, 5.0]), // front 0
            evaluated(&[3.0, 3.0]), // front 0
            evaluated(&[5.0, 1.0]), // front 0
            evaluated(&[4.0, 4.0]), // dominated by (3,3) -> front 1
            evaluated(&[6.0, 6.0]), // dominated by (4,4) too -> front 2
        ];
        let fronts = partition_fronts(&pool).unwrap();
        assert_eq!(fronts.len(), 3);
        assert_eq!(fronts[0], vec![0, 1, 2]);
        assert_eq!(fronts[1], vec![3]);
        assert_eq!(fronts[2], vec![4]);
    }

    #[test]
    fn test_partition_single_solution() {
        let pool = vec![evaluated(&[1.0, 2.0])];
        let fronts = partition_fronts(&pool).unwrap();
        assert_eq!(fronts, vec![vec![0]]);
    }

    #[test]
    fn test_partition_infeasible_ranks_behind_feasible() {
        let feasible = evaluated(&[9.0, 9.0]);
        let mut infeasible = evaluated(&[1.0, 1.0]);
        infeasible.set_constraint_violation(2.0);

        let fronts = partition_fronts(&[feasible, infeasible]).unwrap();
        assert_eq!(fronts, vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_partition_unevaluated_is_error() {
        let pool = vec![evaluated(&[1.0]), Solution::new(vec![0.0])];
        assert!(matches!(
            partition_fronts(&pool),
            Err(Error::InvalidState(_))
        ));
    }

    // ---- Rank and score ----

    #[test]
    fn test_ranks_are_front_indices() {
        let mut pool = vec![
            evaluated(&[1.0, 5.0]),
            evaluated(&[5.0, 1.0]),
            evaluated(&[6.0, 6.0]),
        ];
        rank_and_score(&mut pool, &config()).unwrap();
        assert_eq!(pool[0].rank(), 0);
        assert_eq!(pool[1].rank(), 0);
        assert_eq!(pool[2].rank(), 1);
    }

    #[test]
    fn test_empty_pool_is_noop() {
        let mut pool: Vec<Solution> = Vec::new();
        assert!(rank_and_score(&mut pool, &config()).is_ok());
    }

    #[test]
    fn test_lower_rank_orders_first() {
        let mut pool = vec![
            evaluated(&[1.0, 5.0]),
            evaluated(&[3.0, 3.0]),
            evaluated(&[5.0, 1.0]),
            evaluated(&[4.0, 4.0]),
        ];
        rank_and_score(&mut pool, &config()).unwrap();

        let dominated = &pool[3];
        for member in &pool[..3] {
            assert_eq!(member.compare_fitness(dominated), Ordering::Less);
        }
    }

    #[test]
    fn test_boundary_members_get_boundary_credit() {
        let mut pool = vec![
            evaluated(&[0.0, 4.0]),
            evaluated(&[2.0, 2.0]),
            evaluated(&[4.0, 0.0]),
        ];
        let cfg = config();
        rank_and_score(&mut pool, &cfg).unwrap();

        // Extremes: fitness = 0 * rank_weight - boundary credit.
        assert_eq!(pool[0].fitness(), -cfg.density_boundary_weight);
        assert_eq!(pool[2].fitness(), -cfg.density_boundary_weight);
        // Interior member earns the weighted feature credit instead.
        assert!(pool[1].fitness() > -cfg.density_boundary_weight - 1e-12);
        assert!(pool[1].fitness() <= 0.0);
    }

    #[test]
    fn test_sparser_interior_scores_better() {
        // Five front-0 points on a line; index 2 sits in a crowded cluster,
        // index 1 is isolated.
        let mut pool = vec![
            evaluated(&[0.0, 10.0]),  // boundary
            evaluated(&[4.0, 6.0]),   // isolated interior
            evaluated(&[8.9, 1.1]),   // clustered interior
            evaluated(&[9.0, 1.0]),   // clustered interior
            evaluated(&[10.0, 0.0]),  // boundary
        ];
        rank_and_score(&mut pool, &config()).unwrap();

        assert_eq!(pool[1].rank(), 0);
        assert_eq!(pool[2].rank(), 0);
        assert!(
            pool[1].fitness() < pool[2].fitness(),
            "isolated {} should beat clustered {}",
            pool[1].fitness(),
            pool[2].fitness()
        );
    }

    #[test]
    fn test_zero_weights_collapse_to_pure_rank() {
        let mut pool = vec![
            evaluated(&[0.0, 10.0]),
            evaluated(&[5.0, 5.0]),
            evaluated(&[10.0, 0.0]),
            evaluated(&[11.0, 11.0]),
        ];
        let cfg = ParetoGaConfig::default().with_fitness_weights(1.0, 0.0, 0.0, 0.0);
        rank_and_score(&mut pool, &cfg).unwrap();

        assert_eq!(pool[0].fitness(), 0.0);
        assert_eq!(pool[1].fitness(), 0.0);
        assert_eq!(pool[2].fitness(), 0.0);
        assert_eq!(pool[3].fitness(), 1.0);
    }

    // ---- Crowding ----

    #[test]
    fn test_crowding_two_member_front_all_infinite() {
        let pool = vec![evaluated(&[1.0, 3.0]), evaluated(&[3.0, 1.0])];
        let d = crowding_distances(&pool, &[0, 1]);
        assert!(d.iter().all(|x| x.is_infinite()));
    }

    #[test]
    fn test_crowding_evenly_spaced_interior_equal() {
        let pool = vec![
            evaluated(&[0.0, 4.0]),
            evaluated(&[1.0, 3.0]),
            evaluated(&[2.0, 2.0]),
            evaluated(&[3.0, 1.0]),
            evaluated(&[4.0, 0.0]),
        ];
        let d = crowding_distances(&pool, &[0, 1, 2, 3, 4]);
        assert!(d[0].is_infinite());
        assert!(d[4].is_infinite());
        assert!((d[1] - d[2]).abs() < 1e-10);
        assert!((d[2] - d[3]).abs() < 1e-10);
    }

    #[test]
    fn test_crowding_zero_range_objective() {
        let pool = vec![
            evaluated(&[1.0, 5.0]),
            evaluated(&[2.0, 5.0]),
            evaluated(&[3.0, 5.0]),
        ];
        let d = crowding_distances(&pool, &[0, 1, 2]);
        assert!(d[0].is_infinite());
        assert!(d[2].is_infinite());
        assert!(d[1].is_finite());
    }

    // ---- Nearest neighbor ----

    #[test]
    fn test_nearest_neighbor_distances() {
        let pool = vec![
            evaluated(&[0.0, 0.0]),
            evaluated(&[3.0, 4.0]), // 5 from origin, closer to (3,5)
            evaluated(&[3.0, 5.0]),
        ];
        let nn = nearest_neighbor_distances(&pool, &[0, 1, 2]);
        assert!((nn[0] - 5.0).abs() < 1e-12);
        assert!((nn[1] - 1.0).abs() < 1e-12);
        assert!((nn[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_neighbor_singleton() {
        let pool = vec![evaluated(&[1.0, 1.0])];
        assert_eq!(nearest_neighbor_distances(&pool, &[0]), vec![0.0]);
    }
}
