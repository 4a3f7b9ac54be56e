use crate::core::error::ObjError;
use crate::core::geometry::MeshData;
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// One `v/vt/vn` corner of a face, already resolved to zero-based indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Corner {
    v: u32,
    vt: Option<u32>,
    vn: Option<u32>,
}

struct MeshBuilder {
    mesh: MeshData,
    seen: FnvHashMap<Corner, u32>,
    missing_normals: bool,
}

impl MeshBuilder {
    fn new(name: &str) -> Self {
        Self {
            mesh: MeshData {
                name: name.to_string(),
                ..Default::default()
            },
            seen: FnvHashMap::default(),
            missing_normals: false,
        }
    }

    fn vertex(
        &mut self,
        c: Corner,
        positions: &[[f32; 3]],
        texcoords: &[[f32; 2]],
        normals: &[[f32; 3]],
    ) -> u32 {
        if let Some(&idx) = self.seen.get(&c) {
            return idx;
        }
        let idx = self.mesh.positions.len() as u32;
        self.mesh.positions.push(positions[c.v as usize]);
        self.mesh
            .uvs
            .push(c.vt.map(|t| texcoords[t as usize]).unwrap_or([0.0, 0.0]));
        match c.vn {
            Some(n) => self.mesh.normals.push(normals[n as usize]),
            None => {
                self.missing_normals = true;
                self.mesh.normals.push([0.0, 0.0, 0.0]);
            }
        }
        self.seen.insert(c, idx);
        idx
    }

    fn finish(mut self) -> Option<MeshData> {
        if self.mesh.is_empty() {
            return None;
        }
        if self.missing_normals {
            self.mesh.compute_normals();
        }
        Some(self.mesh)
    }
}

fn parse_floats<const N: usize>(
    tokens: &mut std::str::SplitWhitespace<'_>,
    line: usize,
    keyword: &'static str,
) -> Result<[f32; N], ObjError> {
    let mut out = [0.0f32; N];
    for slot in out.iter_mut() {
        let tok = tokens.next().ok_or(ObjError::MissingComponents {
            line,
            keyword,
            expected: N,
        })?;
        *slot = tok.parse().map_err(|_| ObjError::InvalidNumber {
            line,
            token: tok.to_string(),
        })?;
    }
    Ok(out)
}

/// `vt u [v [w]]`: one to three components, missing ones read as 0.0.
/// Only u and v are kept.
fn parse_texcoord(
    tokens: &mut std::str::SplitWhitespace<'_>,
    line: usize,
) -> Result<[f32; 2], ObjError> {
    let mut out = [0.0f32; 2];
    let mut found = 0;
    for tok in tokens.take(3) {
        let value: f32 = tok.parse().map_err(|_| ObjError::InvalidNumber {
            line,
            token: tok.to_string(),
        })?;
        if let Some(slot) = out.get_mut(found) {
            *slot = value;
        }
        found += 1;
    }
    if found == 0 {
        return Err(ObjError::MissingComponents {
            line,
            keyword: "vt",
            expected: 1,
        });
    }
    Ok(out)
}

fn resolve_index(token: &str, available: usize, line: usize) -> Result<u32, ObjError> {
    let raw: i64 = token.parse().map_err(|_| ObjError::InvalidNumber {
        line,
        token: token.to_string(),
    })?;
    let resolved = if raw > 0 {
        raw - 1
    } else {
        available as i64 + raw
    };
    if raw == 0 || resolved < 0 || resolved >= available as i64 {
        return Err(ObjError::IndexOutOfRange {
            line,
            index: raw,
            available,
        });
    }
    Ok(resolved as u32)
}

fn parse_corner(
    token: &str,
    line: usize,
    counts: (usize, usize, usize),
) -> Result<Corner, ObjError> {
    let mut parts = token.split('/');
    let v = resolve_index(parts.next().unwrap_or(""), counts.0, line)?;
    let vt = match parts.next() {
        Some(s) if !s.is_empty() => Some(resolve_index(s, counts.1, line)?),
        _ => None,
    };
    let vn = match parts.next() {
        Some(s) if !s.is_empty() => Some(resolve_index(s, counts.2, line)?),
        _ => None,
    };
    Ok(Corner { v, vt, vn })
}

/// Parse Wavefront OBJ text into one mesh per `o`/`g` group.
///
/// Polygons are fan-triangulated. Groups without faces are dropped. Vertices
/// without a `vn` get smooth normals computed from the faces that use them.
pub fn parse_obj(src: &str) -> Result<Vec<MeshData>, ObjError> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut texcoords: Vec<[f32; 2]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut meshes = Vec::new();
    let mut current = MeshBuilder::new("default");

    for (i, raw_line) in src.lines().enumerate() {
        let line_no = i + 1;
        let line = raw_line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        match keyword {
            "v" => positions.push(parse_floats::<3>(&mut tokens, line_no, "v")?),
            "vn" => normals.push(parse_floats::<3>(&mut tokens, line_no, "vn")?),
            "vt" => texcoords.push(parse_texcoord(&mut tokens, line_no)?),
            "o" | "g" => {
                let name = tokens.collect::<Vec<_>>().join(" ");
                let finished = std::mem::replace(&mut current, MeshBuilder::new(&name));
                meshes.extend(finished.finish());
            }
            "f" => {
                let counts = (positions.len(), texcoords.len(), normals.len());
                let corners = tokens
                    .map(|t| parse_corner(t, line_no, counts))
                    .collect::<Result<SmallVec<[Corner; 4]>, _>>()?;
                if corners.len() < 3 {
                    return Err(ObjError::DegenerateFace {
                        line: line_no,
                        found: corners.len(),
                    });
                }
                let idx: SmallVec<[u32; 4]> = corners
                    .iter()
                    .map(|c| current.vertex(*c, &positions, &texcoords, &normals))
                    .collect();
                for k in 1..idx.len() - 1 {
                    current
                        .mesh
                        .indices
                        .extend_from_slice(&[idx[0], idx[k], idx[k + 1]]);
                }
            }
            // mtllib, usemtl, s, l, p: the whole asset shares one material
            _ => {}
        }
    }
    meshes.extend(current.finish());

    if meshes.is_empty() {
        return Err(ObjError::Empty);
    }
    Ok(meshes)
}
