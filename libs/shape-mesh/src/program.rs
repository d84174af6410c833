//! # GPU Program Service
//!
//! The contract the renderer's graphics layer implements for compiling the
//! shader program that draws [`MeshBuffer`](crate::MeshBuffer)s, plus the
//! default flat-color shader pair and a loader that resolves its locations.
//!
//! Failures never cross this boundary as errors: compilers return
//! [`ProgramHandle::INVALID`] or [`Location::INVALID`] and the loader logs
//! what went missing.

/// GLSL ES vertex shader matching the [`MeshBuffer`](crate::MeshBuffer)
/// attribute layout.
pub const FLAT_COLOR_VERTEX_SHADER: &str = "\
uniform mat4 u_mvp;
attribute vec4 vertex;
attribute vec4 normal;
attribute vec4 color;
varying vec4 v_color;
void main() {
  gl_Position = u_mvp * vec4(vertex.xyz, 1.0);
  v_color = vec4(color.xyz, 1.0);
}
";

/// GLSL ES fragment shader passing the interpolated vertex color through.
pub const FLAT_COLOR_FRAGMENT_SHADER: &str = "\
precision mediump float;
varying vec4 v_color;
void main() {
  gl_FragColor = v_color;
}
";

/// Name of the model-view-projection uniform.
pub const MVP_UNIFORM: &str = "u_mvp";
/// Name of the position attribute.
pub const VERTEX_ATTRIBUTE: &str = "vertex";
/// Name of the normal attribute.
pub const NORMAL_ATTRIBUTE: &str = "normal";
/// Name of the color attribute.
pub const COLOR_ATTRIBUTE: &str = "color";

/// Handle to a linked GPU program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

impl ProgramHandle {
    /// Returned when compilation or linking failed.
    pub const INVALID: Self = Self(0);

    /// Returns true unless this is [`Self::INVALID`].
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// Location of a uniform or attribute inside a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location(pub i32);

impl Location {
    /// Returned when the name is not active in the program.
    pub const INVALID: Self = Self(-1);

    /// Returns true unless this is [`Self::INVALID`].
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 >= 0
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Compiles shader programs and looks up their locations.
///
/// Implementations log their own compiler diagnostics and report failure only
/// through the sentinel values.
pub trait ProgramCompiler {
    /// Compiles and links a program from vertex and fragment sources.
    fn compile_program(&mut self, vertex_source: &str, fragment_source: &str) -> ProgramHandle;

    /// Looks up a uniform by name.
    fn uniform_location(&self, program: ProgramHandle, name: &str) -> Location;

    /// Looks up a vertex attribute by name.
    fn attrib_location(&self, program: ProgramHandle, name: &str) -> Location;
}

/// A compiled program together with the locations the mesh renderer binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderProgram {
    /// Program handle
    pub id: ProgramHandle,
    /// Model-view-projection matrix uniform
    pub u_mvp: Location,
    /// Position attribute
    pub vertex: Location,
    /// Normal attribute
    pub normal: Location,
    /// Color attribute
    pub color: Location,
    /// Texture sampler uniform, unused by the flat-color program
    pub texture: Location,
    /// Viewport resolution uniform, unused by the flat-color program
    pub resolution: Location,
}

impl ShaderProgram {
    /// Returns true if the program linked and every location the flat-color
    /// pipeline binds was found.
    pub fn is_valid(&self) -> bool {
        self.id.is_valid()
            && self.u_mvp.is_valid()
            && self.vertex.is_valid()
            && self.normal.is_valid()
            && self.color.is_valid()
    }
}

/// Compiles the flat-color program and resolves its locations.
///
/// Never fails; check [`ShaderProgram::is_valid`] before drawing.
pub fn load_default_program<C: ProgramCompiler + ?Sized>(compiler: &mut C) -> ShaderProgram {
    let id = compiler.compile_program(FLAT_COLOR_VERTEX_SHADER, FLAT_COLOR_FRAGMENT_SHADER);
    if !id.is_valid() {
        log::error!("flat-color program failed to compile or link");
        return ShaderProgram {
            id,
            u_mvp: Location::INVALID,
            vertex: Location::INVALID,
            normal: Location::INVALID,
            color: Location::INVALID,
            texture: Location::INVALID,
            resolution: Location::INVALID,
        };
    }

    let lookup = |location: Location, kind: &str, name: &str| {
        if !location.is_valid() {
            log::warn!("{kind} `{name}` not found in program {}", id.0);
        }
        location
    };

    ShaderProgram {
        id,
        u_mvp: lookup(compiler.uniform_location(id, MVP_UNIFORM), "uniform", MVP_UNIFORM),
        vertex: lookup(
            compiler.attrib_location(id, VERTEX_ATTRIBUTE),
            "attribute",
            VERTEX_ATTRIBUTE,
        ),
        normal: lookup(
            compiler.attrib_location(id, NORMAL_ATTRIBUTE),
            "attribute",
            NORMAL_ATTRIBUTE,
        ),
        color: lookup(
            compiler.attrib_location(id, COLOR_ATTRIBUTE),
            "attribute",
            COLOR_ATTRIBUTE,
        ),
        texture: Location::INVALID,
        resolution: Location::INVALID,
    }
}
