use super::Centroid;
use crate::points::{Point, PointStore};

/// Returns, for every point, the index of its nearest centroid.
///
/// Ties keep the lower index: centroid 0 starts as the best candidate and is
/// only replaced by a strictly closer one.
#[must_use]
pub fn assign(points: &PointStore, centroids: &[Centroid]) -> Vec<usize> {
    points
        .iter()
        .map(|point| nearest_centroid(*point, centroids))
        .collect()
}

fn nearest_centroid(point: Point, centroids: &[Centroid]) -> usize {
    let Some((first, rest)) = centroids.split_first() else {
        return 0;
    };
    let mut best = 0;
    let mut best_distance = first.distance_to(point);
    for (offset, centroid) in rest.iter().enumerate() {
        let distance = centroid.distance_to(point);
        if distance < best_distance {
            best = offset + 1;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(coords: &[(i64, i64)]) -> PointStore {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn picks_closest_centroid() {
        let points = store(&[(0, 0), (9, 9), (5, 4)]);
        let centroids = [Centroid::new(0.0, 0.0), Centroid::new(10.0, 10.0)];
        assert_eq!(assign(&points, &centroids), vec![0, 1, 0]);
    }

    #[test]
    fn ties_keep_the_lower_index() {
        let points = store(&[(5, 0)]);
        let centroids = [
            Centroid::new(10.0, 0.0),
            Centroid::new(0.0, 0.0),
            Centroid::new(10.0, 0.0),
        ];
        assert_eq!(assign(&points, &centroids), vec![0]);

        let centroids = [
            Centroid::new(100.0, 0.0),
            Centroid::new(0.0, 0.0),
            Centroid::new(10.0, 0.0),
        ];
        assert_eq!(assign(&points, &centroids), vec![1]);
    }

    #[test]
    fn single_centroid_takes_everything() {
        let points = store(&[(-100, 3), (0, 0), (7, 7)]);
        assert_eq!(assign(&points, &[Centroid::new(1.0, 1.0)]), vec![0, 0, 0]);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn coord_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
            proptest::collection::vec((-1000i64..1000, -1000i64..1000), 1..64)
        }

        fn centroid_strategy() -> impl Strategy<Value = Vec<Centroid>> {
            proptest::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 1..8)
                .prop_map(|pairs| pairs.into_iter().map(|(x, y)| Centroid::new(x, y)).collect())
        }

        proptest! {
            #[test]
            fn assignment_is_pure_and_in_range(coords in coord_strategy(), centroids in centroid_strategy()) {
                let points = store(&coords);
                let first = assign(&points, &centroids);
                let second = assign(&points, &centroids);
                prop_assert_eq!(&first, &second);
                prop_assert_eq!(first.len(), points.len());
                prop_assert!(first.iter().all(|&label| label < centroids.len()));
            }

            #[test]
            fn no_centroid_is_strictly_closer(coords in coord_strategy(), centroids in centroid_strategy()) {
                let points = store(&coords);
                for (point, label) in points.iter().zip(assign(&points, &centroids)) {
                    let chosen = centroids[label].distance_to(*point);
                    for centroid in &centroids {
                        prop_assert!(centroid.distance_to(*point) >= chosen);
                    }
                }
            }
        }
    }
}
