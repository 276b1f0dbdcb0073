//! Binary STL fixture encoding — the wire format the analyzer consumes.

use crate::meshes::Triangle;

/// Encode a triangle soup as a binary STL buffer.
///
/// Binary STL format:
/// - 80-byte header (arbitrary text)
/// - u32 triangle count (little-endian)
/// - For each triangle: 3×f32 normal + 3×(3×f32 vertex) + u16 attribute = 50 bytes
pub fn encode_binary_stl(triangles: &[Triangle], name: &str) -> Vec<u8> {
    let file_size = 80 + 4 + triangles.len() * 50;
    let mut buf = Vec::with_capacity(file_size);

    // 80-byte header
    let header = format!("binary STL: {}", name);
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);

    // Triangle count
    buf.extend_from_slice(&(triangles.len() as u32).to_le_bytes());

    for tri in triangles {
        // Face normal from the cross product of two edges.
        let (ax, ay, az) = (
            tri[1][0] - tri[0][0],
            tri[1][1] - tri[0][1],
            tri[1][2] - tri[0][2],
        );
        let (bx, by, bz) = (
            tri[2][0] - tri[0][0],
            tri[2][1] - tri[0][1],
            tri[2][2] - tri[0][2],
        );
        let nx = ay * bz - az * by;
        let ny = az * bx - ax * bz;
        let nz = ax * by - ay * bx;
        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        let (nx, ny, nz) = if len > 1e-12 {
            (nx / len, ny / len, nz / len)
        } else {
            (0.0f32, 0.0, 1.0)
        };

        buf.extend_from_slice(&nx.to_le_bytes());
        buf.extend_from_slice(&ny.to_le_bytes());
        buf.extend_from_slice(&nz.to_le_bytes());

        for v in tri {
            buf.extend_from_slice(&v[0].to_le_bytes());
            buf.extend_from_slice(&v[1].to_le_bytes());
            buf.extend_from_slice(&v[2].to_le_bytes());
        }

        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    buf
}

/// Drop the last `cut` bytes of a fixture to simulate a truncated upload.
pub fn truncated(mut bytes: Vec<u8>, cut: usize) -> Vec<u8> {
    let keep = bytes.len().saturating_sub(cut);
    bytes.truncate(keep);
    bytes
}
