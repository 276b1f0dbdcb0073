//! Binary STL parsing and quantity accumulation.
//!
//! Binary STL layout (little-endian, fixed):
//!
//! ```text
//! UINT8[80]    – Header (ignored)
//! UINT32       – Number of triangles
//! foreach triangle (50 bytes)
//!     REAL32[3] – Normal vector (ignored, normals are recomputed downstream)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (ignored)
//! end
//! ```
//!
//! Coordinates are treated as millimeters, the conventional unit for this
//! format in the printing domain.

use tracing::{debug, info};

use quote_types::MeshMetrics;

use crate::error::AnalyzeError;

/// STL binary header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of the triangle-count field.
pub const COUNT_SIZE: usize = 4;

/// Size of one triangle record (normal + 3 vertices + attribute).
pub const TRIANGLE_SIZE: usize = 50;

/// Analyze a binary STL buffer: vertex array, surface area, enclosed volume.
///
/// Pure and deterministic. Vertices are emitted in file order (v1, v2, v3
/// per triangle), which the renderer relies on. Trailing bytes beyond the
/// declared records are tolerated.
///
/// # Errors
///
/// - [`AnalyzeError::UnsupportedFormat`] if the buffer looks like ASCII STL
/// - [`AnalyzeError::TruncatedHeader`] if the buffer cannot hold the header
///   and triangle count
/// - [`AnalyzeError::CorruptMesh`] if the declared triangle count exceeds
///   the available bytes
pub fn analyze(bytes: &[u8]) -> Result<MeshMetrics, AnalyzeError> {
    if looks_like_ascii_stl(bytes) {
        return Err(AnalyzeError::UnsupportedFormat);
    }

    if bytes.len() < HEADER_SIZE + COUNT_SIZE {
        return Err(AnalyzeError::TruncatedHeader {
            expected: HEADER_SIZE + COUNT_SIZE,
            got: bytes.len(),
        });
    }

    let declared = u32::from_le_bytes([
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ]);

    let required = HEADER_SIZE + COUNT_SIZE + declared as usize * TRIANGLE_SIZE;
    if bytes.len() < required {
        return Err(AnalyzeError::CorruptMesh {
            declared,
            required,
            actual: bytes.len(),
        });
    }

    debug!(triangles = declared, bytes = bytes.len(), "parsing binary STL buffer");

    let mut vertex_positions = Vec::with_capacity(declared as usize * 9);
    let mut area = 0.0f64;
    // Six times the signed volume, divided once at the end.
    let mut signed_volume_x6 = 0.0f64;

    for i in 0..declared as usize {
        let record = &bytes[HEADER_SIZE + COUNT_SIZE + i * TRIANGLE_SIZE..][..TRIANGLE_SIZE];

        // Skip the 12-byte normal; read the three vertices.
        let v1 = read_vertex(&record[12..24]);
        let v2 = read_vertex(&record[24..36]);
        let v3 = read_vertex(&record[36..48]);

        vertex_positions.extend_from_slice(&v1);
        vertex_positions.extend_from_slice(&v2);
        vertex_positions.extend_from_slice(&v3);

        area += triangle_area(v1, v2, v3);
        signed_volume_x6 += signed_tetra_volume_x6(v1, v2, v3);
    }

    let metrics = MeshMetrics {
        vertex_positions,
        surface_area_mm2: area,
        volume_mm3: (signed_volume_x6 / 6.0).abs(),
    };

    info!(
        triangles = declared,
        surface_area_mm2 = metrics.surface_area_mm2,
        volume_mm3 = metrics.volume_mm3,
        "mesh analysis complete"
    );

    Ok(metrics)
}

/// Heuristic ASCII STL detection: starts with "solid" and the header region
/// contains no NUL bytes (binary headers almost always do).
fn looks_like_ascii_stl(bytes: &[u8]) -> bool {
    let probe = &bytes[..bytes.len().min(HEADER_SIZE)];
    let text = String::from_utf8_lossy(probe);
    text.trim_start().starts_with("solid") && !probe.contains(&0)
}

/// Read a vertex from 12 bytes (3 × f32 LE).
fn read_vertex(buf: &[u8]) -> [f32; 3] {
    [
        f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
        f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
        f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
    ]
}

/// Triangle area: half the cross-product magnitude of two edges from v1.
fn triangle_area(v1: [f32; 3], v2: [f32; 3], v3: [f32; 3]) -> f64 {
    let ax = f64::from(v2[0]) - f64::from(v1[0]);
    let ay = f64::from(v2[1]) - f64::from(v1[1]);
    let az = f64::from(v2[2]) - f64::from(v1[2]);
    let bx = f64::from(v3[0]) - f64::from(v1[0]);
    let by = f64::from(v3[1]) - f64::from(v1[1]);
    let bz = f64::from(v3[2]) - f64::from(v1[2]);

    let cx = ay * bz - az * by;
    let cy = az * bx - ax * bz;
    let cz = ax * by - ay * bx;
    (cx * cx + cy * cy + cz * cz).sqrt() / 2.0
}

/// Six times the signed volume of the tetrahedron (origin, v1, v2, v3):
/// dot(v1, cross(v2, v3)). Summed over a closed, consistently wound surface
/// this yields six times the enclosed volume, for any origin.
fn signed_tetra_volume_x6(v1: [f32; 3], v2: [f32; 3], v3: [f32; 3]) -> f64 {
    let (x0, y0, z0) = (f64::from(v1[0]), f64::from(v1[1]), f64::from(v1[2]));
    let (x1, y1, z1) = (f64::from(v2[0]), f64::from(v2[1]), f64::from(v2[2]));
    let (x2, y2, z2) = (f64::from(v3[0]), f64::from(v3[1]), f64::from(v3[2]));

    x0 * (y1 * z2 - y2 * z1) + x1 * (y2 * z0 - y0 * z2) + x2 * (y0 * z1 - y1 * z0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Encode a triangle soup as a binary STL buffer (zeroed normals).
    fn encode(triangles: &[[[f32; 3]; 3]]) -> Vec<u8> {
        let mut buf = vec![0u8; HEADER_SIZE];
        buf.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
        for tri in triangles {
            buf.extend_from_slice(&[0u8; 12]); // normal, ignored
            for v in tri {
                for c in v {
                    buf.extend_from_slice(&c.to_le_bytes());
                }
            }
            buf.extend_from_slice(&0u16.to_le_bytes());
        }
        buf
    }

    #[test]
    fn single_right_triangle_area() {
        let tri = [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]];
        let metrics = analyze(&encode(&[tri])).unwrap();
        assert_eq!(metrics.triangle_count(), 1);
        assert!((metrics.surface_area_mm2 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn vertex_order_is_preserved() {
        let tri = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let metrics = analyze(&encode(&[tri])).unwrap();
        assert_eq!(
            metrics.vertex_positions,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
    }

    #[test]
    fn degenerate_triangle_contributes_nothing() {
        let tri = [[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]];
        let metrics = analyze(&encode(&[tri])).unwrap();
        assert_eq!(metrics.surface_area_mm2, 0.0);
        assert_eq!(metrics.volume_mm3, 0.0);
    }

    #[test]
    fn trailing_bytes_are_tolerated() {
        let tri = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let mut buf = encode(&[tri]);
        buf.extend_from_slice(b"padding past the declared records");
        assert!(analyze(&buf).is_ok());
    }

    #[test]
    fn truncated_header_is_rejected() {
        let buf = vec![0u8; 40];
        assert!(matches!(
            analyze(&buf),
            Err(AnalyzeError::TruncatedHeader { got: 40, .. })
        ));
    }

    #[test]
    fn truncated_records_are_rejected() {
        let tri = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let mut buf = encode(&[tri, tri]);
        buf.truncate(buf.len() - 7);
        match analyze(&buf) {
            Err(AnalyzeError::CorruptMesh {
                declared,
                required,
                actual,
            }) => {
                assert_eq!(declared, 2);
                assert_eq!(required, HEADER_SIZE + COUNT_SIZE + 2 * TRIANGLE_SIZE);
                assert_eq!(actual, required - 7);
            }
            other => panic!("expected CorruptMesh, got {:?}", other),
        }
    }

    #[test]
    fn ascii_stl_is_rejected() {
        let mut buf = b"solid cube\n  facet normal 0 0 1\n".to_vec();
        buf.resize(200, b' ');
        assert!(matches!(
            analyze(&buf),
            Err(AnalyzeError::UnsupportedFormat)
        ));
    }

    #[test]
    fn binary_header_starting_with_solid_is_not_rejected() {
        // Some binary exporters write "solid" into the 80-byte header; the
        // NUL padding distinguishes them from the ASCII variant.
        let tri = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let mut buf = encode(&[tri]);
        buf[..5].copy_from_slice(b"solid");
        assert!(analyze(&buf).is_ok());
    }

    proptest! {
        /// Any buffer shorter than the declared record space is corrupt.
        #[test]
        fn any_truncation_is_detected(declared in 1u32..1000, cut in 1usize..49) {
            let mut buf = vec![0u8; HEADER_SIZE];
            buf.extend_from_slice(&declared.to_le_bytes());
            // Provide all but the last `cut` bytes of the final record.
            let full = declared as usize * TRIANGLE_SIZE;
            buf.resize(HEADER_SIZE + COUNT_SIZE + full - cut, 0);
            let is_corrupt = matches!(
                analyze(&buf),
                Err(AnalyzeError::CorruptMesh { .. })
            );
            prop_assert!(is_corrupt);
        }
    }
}
