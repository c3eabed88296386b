use crate::distance::DistanceProvider;
use crate::error::{TspError, TspResult};
use crate::route::Route;

/// Greedy tour: from `start`, always travel to the closest unvisited city.
///
/// Ties go to the lowest city index.
pub fn nearest_neighbor<P: DistanceProvider + ?Sized>(provider: &P, start: usize) -> TspResult<Route> {
    let n = provider.city_count();
    if n == 0 {
        return Ok(Route::identity(0));
    }
    if start >= n {
        return Err(TspError::Config(format!(
            "start city {} is out of range for {} cities",
            start, n
        )));
    }

    let mut visited = vec![false; n];
    let mut cities = Vec::with_capacity(n);
    visited[start] = true;
    cities.push(start);
    let mut current = start;

    while cities.len() < n {
        let mut nearest = None;
        let mut smallest = f64::INFINITY;

        for (candidate, &seen) in visited.iter().enumerate() {
            if seen {
                continue;
            }
            let d = provider.distance(current, candidate);
            if nearest.is_none() || d < smallest {
                smallest = d;
                nearest = Some(candidate);
            }
        }

        // at least one city is unvisited while cities.len() < n
        let Some(next) = nearest else { break };
        visited[next] = true;
        cities.push(next);
        current = next;
    }

    Ok(Route::from_cities_unchecked(cities))
}
