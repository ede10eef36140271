use std::ops::{Mul};

///
/// Represents an OpenGL transformation matrix
///
/// Stored in row-major order: `matrix.0[row][column]`, transforming column vectors.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix(pub [[f32; 4]; 4]);

impl Matrix {
    ///
    /// The identity matrix
    ///
    pub fn identity() -> Matrix {
        Matrix([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0]
        ])
    }

    ///
    /// Creates a translation matrix
    ///
    pub fn translate(x: f32, y: f32, z: f32) -> Matrix {
        Matrix([
            [1.0, 0.0, 0.0, x  ],
            [0.0, 1.0, 0.0, y  ],
            [0.0, 0.0, 1.0, z  ],
            [0.0, 0.0, 0.0, 1.0]
        ])
    }

    ///
    /// Creates a scaling matrix
    ///
    pub fn scale(x: f32, y: f32, z: f32) -> Matrix {
        Matrix([
            [x,   0.0, 0.0, 0.0],
            [0.0, y,   0.0, 0.0],
            [0.0, 0.0, z,   0.0],
            [0.0, 0.0, 0.0, 1.0]
        ])
    }

    ///
    /// Creates an orthographic projection matrix
    ///
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix {
        let width   = right - left;
        let height  = top - bottom;
        let depth   = far - near;

        Matrix([
            [2.0/width, 0.0,        0.0,        -(right+left)/width ],
            [0.0,       2.0/height, 0.0,        -(top+bottom)/height],
            [0.0,       0.0,        -2.0/depth, -(far+near)/depth   ],
            [0.0,       0.0,        0.0,        1.0                 ]
        ])
    }

    ///
    /// True if this is the identity matrix
    ///
    pub fn is_identity(&self) -> bool {
        *self == Matrix::identity()
    }

    ///
    /// Applies this matrix to a point (with w = 1), returning the transformed x, y, z
    ///
    pub fn transform_point(&self, x: f32, y: f32, z: f32) -> (f32, f32, f32) {
        let Matrix(ref m) = self;

        (
            m[0][0]*x + m[0][1]*y + m[0][2]*z + m[0][3],
            m[1][0]*x + m[1][1]*y + m[1][2]*z + m[1][3],
            m[2][0]*x + m[2][1]*y + m[2][2]*z + m[2][3]
        )
    }

    ///
    /// Applies this matrix to a 4-component vector
    ///
    pub fn transform_vector(&self, v: [f32; 4]) -> [f32; 4] {
        let Matrix(ref m) = self;
        let mut result    = [0.0; 4];

        for row in 0..4 {
            result[row] = m[row][0]*v[0] + m[row][1]*v[1] + m[row][2]*v[2] + m[row][3]*v[3];
        }

        result
    }

    ///
    /// Converts this matrix to the column-major layout expected by `glUniformMatrix4fv`
    ///
    pub fn to_opengl_matrix(&self) -> [f32; 16] {
        let Matrix(ref m) = self;
        let mut result    = [0.0; 16];

        for col in 0..4 {
            for row in 0..4 {
                result[col*4 + row] = m[row][col];
            }
        }

        result
    }
}

impl Default for Matrix {
    fn default() -> Matrix {
        Matrix::identity()
    }
}

impl Mul<Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, other: Matrix) -> Matrix {
        let Matrix(a) = self;
        let Matrix(b) = other;
        let mut result = [[0.0; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = a[row][0]*b[0][col] + a[row][1]*b[1][col] + a[row][2]*b[2][col] + a[row][3]*b[3][col];
            }
        }

        Matrix(result)
    }
}

impl<'a> Mul<&'a Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, other: &'a Matrix) -> Matrix {
        *self * *other
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identity_is_neutral() {
        let translate = Matrix::translate(3.0, 4.0, 0.0);

        assert!(Matrix::identity() * translate == translate);
        assert!(translate * Matrix::identity() == translate);
    }

    #[test]
    fn translations_compose() {
        let combined = Matrix::translate(1.0, 2.0, 0.0) * Matrix::translate(10.0, 20.0, 0.0);

        assert!(combined == Matrix::translate(11.0, 22.0, 0.0));
    }

    #[test]
    fn multiplication_applies_right_hand_side_first() {
        let scale_then_translate = Matrix::translate(5.0, 0.0, 0.0) * Matrix::scale(2.0, 2.0, 1.0);

        assert!(scale_then_translate.transform_point(1.0, 1.0, 0.0) == (7.0, 2.0, 0.0));
    }

    #[test]
    fn opengl_matrix_is_column_major() {
        let gl_matrix = Matrix::translate(3.0, 4.0, 5.0).to_opengl_matrix();

        assert!(gl_matrix[12] == 3.0);
        assert!(gl_matrix[13] == 4.0);
        assert!(gl_matrix[14] == 5.0);
        assert!(gl_matrix[15] == 1.0);
        assert!(gl_matrix[3] == 0.0);
    }

    #[test]
    fn ortho_maps_viewport_corners_to_clip_space() {
        let ortho = Matrix::ortho(0.0, 256.0, 128.0, 0.0, -1.0, 1.0);

        assert!(ortho.transform_point(0.0, 0.0, 0.0) == (-1.0, 1.0, 0.0));
        assert!(ortho.transform_point(256.0, 128.0, 0.0) == (1.0, -1.0, 0.0));
    }
}
