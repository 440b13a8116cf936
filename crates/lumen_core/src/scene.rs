//! Scene description types for Lumen.
//!
//! A scene is pure data: a list of named materials, a list of objects that
//! reference those materials by name, a camera, a background and the render
//! settings. The renderer turns it into shared geometry and material handles.

use std::collections::HashSet;

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::settings::RenderSettings;

/// Surface material parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDescription {
    /// Diffuse surface.
    Lambertian { albedo: Vec3 },

    /// Specular surface; `fuzz` is clamped to [0, 1] when built.
    Metal {
        albedo: Vec3,
        #[serde(default)]
        fuzz: f32,
    },

    /// Clear refractive surface (glass, water).
    Dielectric { refractive_index: f32 },

    /// Constant emitter.
    DiffuseLight { emit: Vec3 },
}

/// A material with the name objects use to refer to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedMaterial {
    pub name: String,

    #[serde(flatten)]
    pub material: MaterialDescription,
}

impl NamedMaterial {
    pub fn new(name: impl Into<String>, material: MaterialDescription) -> Self {
        Self {
            name: name.into(),
            material,
        }
    }
}

/// Geometry of a single object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },

    /// Axis-aligned box given by two opposite corners.
    Box { min: Vec3, max: Vec3 },
}

/// One object in the scene: a shape and the name of its material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescription {
    pub shape: Shape,
    pub material: String,
}

impl ObjectDescription {
    pub fn new(shape: Shape, material: impl Into<String>) -> Self {
        Self {
            shape,
            material: material.into(),
        }
    }
}

/// Radiance returned by rays that leave the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Background {
    /// Constant environment color.
    Solid { color: Vec3 },

    /// Vertical blend from `horizon` (looking down) to `zenith` (looking up).
    Gradient { horizon: Vec3, zenith: Vec3 },
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid {
            color: Vec3::splat(0.7),
        }
    }
}

/// Thin-lens camera placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,

    /// Vertical field of view in degrees
    pub vfov_degrees: f32,

    /// Lens diameter; 0 gives a pinhole camera
    pub aperture: f32,

    /// Distance from the lens to the plane of perfect focus
    pub focus_distance: f32,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            up: Vec3::Y,
            vfov_degrees: 90.0,
            aperture: 0.0,
            focus_distance: 1.0,
        }
    }
}

/// A complete scene: what to render and how.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub name: String,

    pub camera: CameraDescription,

    #[serde(default)]
    pub background: Background,

    #[serde(default)]
    pub materials: Vec<NamedMaterial>,

    #[serde(default)]
    pub objects: Vec<ObjectDescription>,

    #[serde(default)]
    pub render: RenderSettings,
}

impl SceneDescription {
    /// Create an empty scene with the given name and camera.
    pub fn new(name: impl Into<String>, camera: CameraDescription) -> Self {
        Self {
            name: name.into(),
            camera,
            ..Default::default()
        }
    }

    /// Parse and validate a scene from JSON text.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        let scene: SceneDescription = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Serialize the scene as pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a material, returning its name for use in objects.
    pub fn add_material(&mut self, name: impl Into<String>, material: MaterialDescription) -> String {
        let named = NamedMaterial::new(name, material);
        let name = named.name.clone();
        self.materials.push(named);
        name
    }

    /// Add an object made of the named material.
    pub fn add_object(&mut self, shape: Shape, material: impl Into<String>) {
        self.objects.push(ObjectDescription::new(shape, material));
    }

    /// Look up a material by name.
    pub fn material(&self, name: &str) -> Option<&MaterialDescription> {
        self.materials
            .iter()
            .find(|m| m.name == name)
            .map(|m| &m.material)
    }

    /// Check that material names are unique and every object's material exists.
    ///
    /// Numeric ranges (radii, camera basis) are checked when the renderer
    /// builds the scene.
    pub fn validate(&self) -> SceneResult<()> {
        let mut names = HashSet::new();
        for (i, material) in self.materials.iter().enumerate() {
            if material.name.is_empty() {
                return Err(SceneError::EmptyMaterialName(i));
            }
            if !names.insert(material.name.as_str()) {
                return Err(SceneError::DuplicateMaterial(material.name.clone()));
            }
        }

        for (index, object) in self.objects.iter().enumerate() {
            if !names.contains(object.material.as_str()) {
                return Err(SceneError::UnknownMaterial {
                    index,
                    name: object.material.clone(),
                });
            }
        }

        Ok(())
    }
}
