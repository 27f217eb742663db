/// Builds the side-wall triangle list joining an input ring to its offset
/// ring.
///
/// Input vertex `f` sits at index `base_index + f`; the offset ring follows
/// at `base_index + counts.len()`. `counts[f]` is the number of offset points
/// the corner at vertex `f` produced, zero where the validity filter dropped
/// the vertex. Every corner point fans back to its input vertex and one
/// bridge triangle per input edge closes the strip, so the list always holds
/// `counts.len() + sum(counts)` triangles and every lateral edge is shared by
/// exactly two of them.
pub fn side_wall(base_index: usize, counts: &[usize], flip: bool) -> Vec<[usize; 3]> {
    let n_in = counts.len();
    let n_out: usize = counts.iter().sum();
    if n_out == 0 {
        return Vec::new();
    }
    let inp = |f: usize| base_index + f;
    let out = |j: usize| base_index + n_in + (j % n_out);

    let mut faces = Vec::with_capacity(n_in + n_out);
    let mut s = 0;
    for (f, &c) in counts.iter().enumerate() {
        for i in 0..c {
            faces.push([inp(f), out(s + i + 1), out(s + i)]);
        }
        faces.push([inp(f), inp((f + 1) % n_in), out(s + c)]);
        s += c;
    }

    if flip {
        for face in &mut faces {
            face.swap(0, 2);
        }
    }
    faces
}
