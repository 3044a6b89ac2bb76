use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub(crate) struct Vertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// GPU mesh with vertex and index buffers.
pub(crate) struct Mesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) num_indices: u32,
}

impl Mesh {
    fn new(device: &wgpu::Device, label: &str, vertices: &[Vertex], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            num_indices: indices.len() as u32,
        }
    }

    /// Unit cube centered at the origin.
    pub(crate) fn cube(device: &wgpu::Device) -> Self {
        let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            // normal, u axis, v axis
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ];
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (n, u, v) in faces {
            let (n, u, v) = (Vec3::from(n), Vec3::from(u), Vec3::from(v));
            let base = vertices.len() as u16;
            for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
                let p = n * 0.5 + u * su + v * sv;
                vertices.push(Vertex::new(p.to_array(), n.to_array()));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }
        Self::new(device, "cube", &vertices, &indices)
    }

    /// Regular octahedron with unit circumradius, flat shaded.
    pub(crate) fn octahedron(device: &wgpu::Device) -> Self {
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(24);
        for sx in [1.0f32, -1.0] {
            for sy in [1.0f32, -1.0] {
                for sz in [1.0f32, -1.0] {
                    let a = Vec3::new(sx, 0.0, 0.0);
                    let mut b = Vec3::new(0.0, sy, 0.0);
                    let mut c = Vec3::new(0.0, 0.0, sz);
                    // keep counter-clockwise winding seen from outside
                    if sx * sy * sz < 0.0 {
                        std::mem::swap(&mut b, &mut c);
                    }
                    let n = Vec3::new(sx, sy, sz).normalize();
                    let base = vertices.len() as u16;
                    for p in [a, b, c] {
                        vertices.push(Vertex::new(p.to_array(), n.to_array()));
                    }
                    indices.extend_from_slice(&[base, base + 1, base + 2]);
                }
            }
        }
        Self::new(device, "octahedron", &vertices, &indices)
    }

    /// Unit square in the XZ plane facing +Y.
    pub(crate) fn plane(device: &wgpu::Device) -> Self {
        let n = [0.0, 1.0, 0.0];
        let vertices = [
            Vertex::new([-0.5, 0.0, 0.5], n),
            Vertex::new([0.5, 0.0, 0.5], n),
            Vertex::new([0.5, 0.0, -0.5], n),
            Vertex::new([-0.5, 0.0, -0.5], n),
        ];
        let indices: [u16; 6] = [0, 1, 2, 2, 3, 0];
        Self::new(device, "plane", &vertices, &indices)
    }
}
