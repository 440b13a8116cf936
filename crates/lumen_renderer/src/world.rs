//! Building a renderable world from a scene description.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    Camera, CameraBuilder, Cuboid, Dielectric, DiffuseLight, HittableList, Lambertian, Material,
    Metal, RenderError, RenderResult, Sphere,
};
use lumen_core::{Background, MaterialDescription, RenderSettings, SceneDescription, Shape};

/// Everything needed to render an image.
///
/// Built once, then only read; safe to share across render threads.
pub struct World {
    objects: HittableList,
    camera: Camera,
    background: Background,
    settings: RenderSettings,
}

impl World {
    /// Assemble a world, checking the render settings.
    pub fn new(
        objects: HittableList,
        camera: Camera,
        background: Background,
        settings: RenderSettings,
    ) -> RenderResult<Self> {
        validate_settings(&settings)?;
        Ok(Self {
            objects,
            camera,
            background,
            settings,
        })
    }

    /// Build geometry, materials and camera from a scene description.
    ///
    /// Each material is built once and shared by every object that names it.
    pub fn from_description(scene: &SceneDescription) -> RenderResult<Self> {
        scene.validate()?;

        let mut materials: HashMap<&str, Arc<dyn Material>> = HashMap::new();
        for named in &scene.materials {
            materials.insert(named.name.as_str(), build_material(&named.material)?);
        }

        let mut objects = HittableList::new();
        for object in &scene.objects {
            // validate() guarantees the name resolves
            let material = materials
                .get(object.material.as_str())
                .cloned()
                .ok_or_else(|| lumen_core::SceneError::UnknownMaterial {
                    index: objects.len(),
                    name: object.material.clone(),
                })?;

            match object.shape {
                Shape::Sphere { center, radius } => {
                    objects.add(Arc::new(Sphere::new(center, radius, material)?));
                }
                Shape::Box { min, max } => {
                    objects.add(Arc::new(Cuboid::new(min, max, material)?));
                }
            }
        }

        let camera =
            CameraBuilder::from_description(&scene.camera, scene.render.aspect_ratio).build()?;

        log::info!(
            "Built world '{}': {} objects, {} materials",
            scene.name,
            objects.len(),
            materials.len()
        );

        Self::new(objects, camera, scene.background.clone(), scene.render.clone())
    }

    pub fn objects(&self) -> &HittableList {
        &self.objects
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    /// Render settings, validated when the world was built.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Image width and height in pixels.
    pub fn image_size(&self) -> (u32, u32) {
        (self.settings.image_width, self.settings.image_height())
    }
}

/// Turn a material description into a shared material handle.
fn build_material(desc: &MaterialDescription) -> RenderResult<Arc<dyn Material>> {
    let material: Arc<dyn Material> = match *desc {
        MaterialDescription::Lambertian { albedo } => Arc::new(Lambertian::new(albedo)),
        MaterialDescription::Metal { albedo, fuzz } => Arc::new(Metal::new(albedo, fuzz)),
        MaterialDescription::Dielectric { refractive_index } => {
            Arc::new(Dielectric::new(refractive_index)?)
        }
        MaterialDescription::DiffuseLight { emit } => Arc::new(DiffuseLight::new(emit)),
    };
    Ok(material)
}

fn validate_settings(settings: &RenderSettings) -> RenderResult<()> {
    if !(settings.aspect_ratio.is_finite() && settings.aspect_ratio > 0.0) {
        return Err(RenderError::InvalidSettings("aspect ratio must be positive"));
    }
    if settings.image_width == 0 || settings.image_height() == 0 {
        return Err(RenderError::InvalidSettings("image must be at least one pixel"));
    }
    if settings.samples_per_pixel == 0 {
        return Err(RenderError::InvalidSettings("samples per pixel must be positive"));
    }
    if settings.bucket_size == 0 {
        return Err(RenderError::InvalidSettings("bucket size must be positive"));
    }
    Ok(())
}
