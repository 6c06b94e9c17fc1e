//! Hull JSON support
//!
//! A hull document carries a point cloud and the facets of its convex hull:
//!
//! ```json
//! { "Cloud": [[x, y, z], ...], "Index": [[i, j, k], ...], "Normals": [[nx, ny, nz], ...] }
//! ```
//!
//! `Cloud` and `Index` are required; `Normals` is optional and, when present,
//! holds one normal per facet.

use hullview_core::{
    point_from_array, point_to_array, Error, Facet, HullData, PointCloud, Result, Vector3f,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// On-disk layout of a hull document, before shape validation
#[derive(Debug, Deserialize)]
struct RawHull {
    #[serde(rename = "Cloud")]
    cloud: Vec<Vec<f32>>,
    #[serde(rename = "Index")]
    index: Vec<Vec<i64>>,
    #[serde(rename = "Normals", default)]
    normals: Option<Vec<Vec<f32>>>,
}

#[derive(Debug, Serialize)]
struct HullDocument<'a> {
    #[serde(rename = "Cloud")]
    cloud: Vec<[f32; 3]>,
    #[serde(rename = "Index")]
    index: &'a [Facet],
    #[serde(rename = "Normals")]
    normals: Vec<[f32; 3]>,
}

/// Read a hull document from a file
pub fn read_hull<P: AsRef<Path>>(path: P) -> Result<HullData> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let hull = parse_hull(BufReader::new(file))?;
    info!(
        path = %path.display(),
        points = hull.cloud.len(),
        facets = hull.facet_count(),
        "loaded hull document"
    );
    Ok(hull)
}

/// Parse a hull document from any reader
pub fn parse_hull<R: Read>(reader: R) -> Result<HullData> {
    let raw: RawHull = serde_json::from_reader(reader).map_err(json_error)?;
    raw.into_hull()
}

/// Parse a hull document held in memory
pub fn parse_hull_str(text: &str) -> Result<HullData> {
    let raw: RawHull = serde_json::from_str(text).map_err(json_error)?;
    raw.into_hull()
}

/// Write a hull document to a file
pub fn write_hull<P: AsRef<Path>>(hull: &HullData, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_hull_to(hull, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a hull document to any writer.
///
/// Facet normals are computed from the winding when the data carries none.
pub fn write_hull_to<W: Write>(hull: &HullData, writer: W) -> Result<()> {
    let normals = match &hull.normals {
        Some(normals) => normals.iter().map(|n| [n.x, n.y, n.z]).collect(),
        None => hull.facet_normals().iter().map(|n| [n.x, n.y, n.z]).collect(),
    };
    let document = HullDocument {
        cloud: hull.cloud.iter().map(point_to_array).collect(),
        index: &hull.facets,
        normals,
    };
    serde_json::to_writer_pretty(writer, &document).map_err(json_error)
}

fn json_error(err: serde_json::Error) -> Error {
    if err.is_io() {
        Error::Io(err.into())
    } else {
        Error::MalformedInput(err.to_string())
    }
}

fn triple<T: Copy>(values: &[T], field: &str, position: usize) -> Result<[T; 3]> {
    match values {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(Error::MalformedInput(format!(
            "{}[{}] has {} components, expected 3",
            field,
            position,
            values.len()
        ))),
    }
}

impl RawHull {
    fn into_hull(self) -> Result<HullData> {
        let cloud = self
            .cloud
            .iter()
            .enumerate()
            .map(|(i, p)| triple(p, "Cloud", i).map(point_from_array))
            .collect::<Result<PointCloud>>()?;

        let facets = self
            .index
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let [a, b, c] = triple(f, "Index", i)?;
                Ok([to_index(a, i)?, to_index(b, i)?, to_index(c, i)?])
            })
            .collect::<Result<Vec<Facet>>>()?;

        let hull = HullData::new(cloud, facets)?;
        debug!(
            points = hull.cloud.len(),
            facets = hull.facet_count(),
            has_normals = self.normals.is_some(),
            "parsed hull document"
        );

        match self.normals {
            Some(normals) => {
                let normals = normals
                    .iter()
                    .enumerate()
                    .map(|(i, n)| triple(n, "Normals", i).map(Vector3f::from))
                    .collect::<Result<Vec<_>>>()?;
                hull.with_normals(normals)
            }
            None => Ok(hull),
        }
    }
}

fn to_index(value: i64, facet: usize) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        Error::MalformedInput(format!("Index[{}] contains negative index {}", facet, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hullview_core::Point3f;

    #[test]
    fn test_parse_preserves_order() {
        let hull = parse_hull_str(
            r#"{"Cloud":[[0,0,0],[1,0,0],[0,1,0],[0,0,1]],
                "Index":[[0,2,1],[0,1,3],[0,3,2],[1,2,3]]}"#,
        )
        .unwrap();

        assert_eq!(hull.cloud.len(), 4);
        assert_eq!(hull.cloud[1], Point3f::new(1.0, 0.0, 0.0));
        assert_eq!(hull.cloud[3], Point3f::new(0.0, 0.0, 1.0));
        assert_eq!(hull.facets, vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]]);
        assert!(hull.normals.is_none());
    }

    #[test]
    fn test_out_of_range_index() {
        let err = parse_hull_str(r#"{"Cloud":[[0,0,0],[1,0,0]], "Index":[[0,1,5]]}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)), "{err}");
    }

    #[test]
    fn test_missing_fields() {
        let err = parse_hull_str(r#"{"Cloud":[[0,0,0]]}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));

        let err = parse_hull_str(r#"{"Index":[]}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn test_wrong_arity() {
        let err = parse_hull_str(r#"{"Cloud":[[0,0]], "Index":[]}"#).unwrap_err();
        assert!(err.to_string().contains("Cloud[0]"));

        let err = parse_hull_str(r#"{"Cloud":[[0,0,0]], "Index":[[0,0,0,0]]}"#).unwrap_err();
        assert!(err.to_string().contains("Index[0]"));
    }

    #[test]
    fn test_negative_and_fractional_indices() {
        let err = parse_hull_str(r#"{"Cloud":[[0,0,0]], "Index":[[0,0,-1]]}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));

        let err = parse_hull_str(r#"{"Cloud":[[0,0,0]], "Index":[[0,0,0.5]]}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn test_normals_are_read() {
        let hull = parse_hull_str(
            r#"{"Cloud":[[0,0,0],[1,0,0],[0,1,0]], "Index":[[0,1,2]], "Normals":[[0,0,1]]}"#,
        )
        .unwrap();
        assert_eq!(hull.normals, Some(vec![Vector3f::new(0.0, 0.0, 1.0)]));

        let err = parse_hull_str(
            r#"{"Cloud":[[0,0,0],[1,0,0],[0,1,0]], "Index":[[0,1,2]], "Normals":[]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn test_written_document_reads_back() {
        let hull = parse_hull_str(r#"{"Cloud":[[0,0,0],[1,0,0],[0,1,0]], "Index":[[0,1,2]]}"#)
            .unwrap();

        let mut buffer = Vec::new();
        write_hull_to(&hull, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"Normals\""));

        let reread = parse_hull_str(&text).unwrap();
        assert_eq!(reread.cloud, hull.cloud);
        assert_eq!(reread.facets, hull.facets);
        assert_eq!(reread.normals, Some(vec![Vector3f::new(0.0, 0.0, 1.0)]));
    }
}
