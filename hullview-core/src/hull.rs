//! Convex hull data: a point cloud plus triangular facets indexing into it

use crate::error::{Error, Result};
use crate::point::*;
use crate::point_cloud::PointCloud;
use serde::{Deserialize, Serialize};

/// One triangular hull face, given as three indices into a [`PointCloud`]
pub type Facet = [usize; 3];

/// A point cloud together with the facets of its convex hull
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HullData {
    pub cloud: PointCloud,
    pub facets: Vec<Facet>,
    /// Per-facet outward normals, when the producer recorded them
    pub normals: Option<Vec<Vector3f>>,
}

impl HullData {
    /// Build hull data, checking every facet index against the cloud
    pub fn new(cloud: PointCloud, facets: Vec<Facet>) -> Result<Self> {
        validate_facets(&cloud, &facets)?;
        Ok(Self {
            cloud,
            facets,
            normals: None,
        })
    }

    /// Attach per-facet normals; the count must match the facet count
    pub fn with_normals(mut self, normals: Vec<Vector3f>) -> Result<Self> {
        if normals.len() != self.facets.len() {
            return Err(Error::MalformedInput(format!(
                "{} normals given for {} facets",
                normals.len(),
                self.facets.len()
            )));
        }
        self.normals = Some(normals);
        Ok(self)
    }

    /// Get the number of facets
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Resolve a facet's indices to its three corner points
    pub fn facet_points(&self, facet: &Facet) -> [Point3f; 3] {
        resolve_facet(&self.cloud, facet)
    }

    /// Iterate over all facets as resolved triangles
    pub fn triangles(&self) -> impl Iterator<Item = [Point3f; 3]> + '_ {
        self.facets.iter().map(move |f| self.facet_points(f))
    }

    /// Normals of every facet, computed from the vertex winding
    pub fn facet_normals(&self) -> Vec<Vector3f> {
        self.triangles()
            .map(|[a, b, c]| triangle_normal(&a, &b, &c))
            .collect()
    }
}

/// Resolve a facet against a cloud. Indices must already be validated.
pub fn resolve_facet(cloud: &PointCloud, facet: &Facet) -> [Point3f; 3] {
    [cloud[facet[0]], cloud[facet[1]], cloud[facet[2]]]
}

/// Check that every facet index lies in `[0, cloud.len())`
pub fn validate_facets(cloud: &PointCloud, facets: &[Facet]) -> Result<()> {
    for (position, facet) in facets.iter().enumerate() {
        if let Some(&bad) = facet.iter().find(|&&i| i >= cloud.len()) {
            return Err(Error::MalformedInput(format!(
                "facet {} references point {} but the cloud has {} points",
                position,
                bad,
                cloud.len()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> PointCloud {
        PointCloud::from_points(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(1.0, 1.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
        ])
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let err = HullData::new(square(), vec![[0, 1, 4]]).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn test_repeated_indices_are_accepted() {
        let hull = HullData::new(square(), vec![[0, 0, 1]]).unwrap();
        assert_eq!(hull.facet_count(), 1);
    }

    #[test]
    fn test_facet_points_and_normals() {
        let hull = HullData::new(square(), vec![[0, 1, 2], [0, 2, 3]]).unwrap();
        let [a, b, c] = hull.facet_points(&hull.facets[1]);
        assert_eq!(a, Point3f::new(0.0, 0.0, 0.0));
        assert_eq!(b, Point3f::new(1.0, 1.0, 0.0));
        assert_eq!(c, Point3f::new(0.0, 1.0, 0.0));

        for n in hull.facet_normals() {
            assert_relative_eq!(n, Vector3f::new(0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn test_normal_count_must_match() {
        let hull = HullData::new(square(), vec![[0, 1, 2]]).unwrap();
        assert!(hull.clone().with_normals(vec![]).is_err());
        assert!(hull.with_normals(vec![Vector3f::z()]).is_ok());
    }
}
