use crate::animation;
use crate::config::GeneratorConfig;
use crate::encode;
use crate::foundation::error::{AnalogonError, AnalogonResult};
use crate::prompts;
use crate::render::cpu::CpuRasterizer;
use crate::render::frame::FrameRGBA;
use crate::render::glyph::FontBook;
use crate::render::painter::ScenePainter;
use crate::task::{SharedSampler, TaskSampler, TaskSpec};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// One generated dataset entry.
#[derive(Clone, Debug)]
pub struct TaskPair {
    pub task_id: String,
    pub domain: String,
    pub prompt: String,
    pub first_image: FrameRGBA,
    pub final_image: FrameRGBA,
    pub ground_truth_video: Option<PathBuf>,
    pub task: TaskSpec,
}

#[derive(serde::Serialize)]
struct TaskMetadata<'a> {
    task_id: &'a str,
    domain: &'a str,
    prompt: &'a str,
    has_video: bool,
    task: &'a TaskSpec,
}

impl TaskPair {
    /// Write this entry into `dir` (created if missing).
    ///
    /// Layout: `first_frame.png`, `final_frame.png`, `prompt.txt`, `task.json`, and
    /// `ground_truth.mp4` when a video was produced. The video is moved out of the staging
    /// directory and `ground_truth_video` is updated to its new location.
    pub fn write_to(&mut self, dir: &Path) -> AnalogonResult<()> {
        use anyhow::Context as _;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create task directory '{}'", dir.display()))?;

        self.first_image.save_png(&dir.join("first_frame.png"))?;
        self.final_image.save_png(&dir.join("final_frame.png"))?;
        std::fs::write(dir.join("prompt.txt"), &self.prompt)
            .with_context(|| format!("failed to write prompt for '{}'", self.task_id))?;

        let meta = TaskMetadata {
            task_id: &self.task_id,
            domain: &self.domain,
            prompt: &self.prompt,
            has_video: self.ground_truth_video.is_some(),
            task: &self.task,
        };
        let json = serde_json::to_string_pretty(&meta)?;
        std::fs::write(dir.join("task.json"), json)
            .with_context(|| format!("failed to write metadata for '{}'", self.task_id))?;

        if let Some(video) = self.ground_truth_video.take() {
            let target = dir.join("ground_truth.mp4");
            move_file(&video, &target)?;
            self.ground_truth_video = Some(target);
        }
        Ok(())
    }
}

/// Rename `from` to `to`, falling back to copy-and-delete across filesystems.
fn move_file(from: &Path, to: &Path) -> AnalogonResult<()> {
    use anyhow::Context as _;
    if from == to {
        return Ok(());
    }
    if std::fs::rename(from, to).is_ok() {
        return Ok(());
    }
    std::fs::copy(from, to)
        .with_context(|| format!("failed to copy video '{}'", from.display()))?;
    if let Err(e) = std::fs::remove_file(from) {
        tracing::warn!(path = %from.display(), error = %e, "failed to remove staged video");
    }
    Ok(())
}

/// Produces [`TaskPair`]s: samples a unique puzzle, paints both scenes, and optionally
/// renders and encodes the ground-truth clip.
#[derive(Debug)]
pub struct TaskGenerator {
    config: GeneratorConfig,
    sampler: SharedSampler,
    painter: ScenePainter<CpuRasterizer>,
    prompt_rng: Mutex<ChaCha8Rng>,
}

impl TaskGenerator {
    /// Build a generator, loading system fonts when a font family is configured.
    pub fn new(config: GeneratorConfig) -> AnalogonResult<Self> {
        let fonts = match config.font_family.as_deref() {
            Some(family) if !family.is_empty() => {
                let fonts = FontBook::system(&[]);
                if !fonts.resolves(family) {
                    tracing::warn!(family, "font family not found, using built-in question mark");
                }
                fonts
            }
            _ => FontBook::empty(),
        };
        Self::with_fonts(config, fonts)
    }

    pub fn with_fonts(config: GeneratorConfig, fonts: FontBook) -> AnalogonResult<Self> {
        config.validate()?;

        let (sampler, prompt_rng) = match config.seed {
            Some(seed) => (
                TaskSampler::seeded(seed),
                ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (TaskSampler::from_entropy(), ChaCha8Rng::from_entropy()),
        };
        let painter = ScenePainter::new(
            CpuRasterizer::new(config.background_color(), fonts),
            config.scene_geometry(),
            config.paint_style(),
        )?;

        Ok(Self {
            config,
            sampler: SharedSampler::new(sampler),
            painter,
            prompt_rng: Mutex::new(prompt_rng),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn painter(&self) -> &ScenePainter<CpuRasterizer> {
        &self.painter
    }

    pub fn sampler(&self) -> &SharedSampler {
        &self.sampler
    }

    /// Sample a fresh puzzle and build its entry.
    pub fn generate_task_pair(&self, task_id: &str) -> AnalogonResult<TaskPair> {
        let task = self.sampler.sample();
        let prompt = self.next_prompt(&task);
        self.build(task_id, task, prompt)
    }

    /// Build an entry for an explicit puzzle, bypassing the sampler.
    pub fn generate_for_task(&self, task_id: &str, task: TaskSpec) -> AnalogonResult<TaskPair> {
        let prompt = self.next_prompt(&task);
        self.build(task_id, task, prompt)
    }

    /// Generate `count` entries with ids `{domain}_{index:04}`.
    ///
    /// Sampling and prompt choice always run in id order, so a seeded run yields the same
    /// dataset whether or not `parallel` spreads the rendering over the rayon pool.
    pub fn generate_dataset(&self, count: usize, parallel: bool) -> AnalogonResult<Vec<TaskPair>> {
        let jobs: Vec<(String, TaskSpec, &'static str)> = (0..count)
            .map(|i| {
                let task = self.sampler.sample();
                let prompt = self.next_prompt(&task);
                (format!("{}_{i:04}", self.config.domain), task, prompt)
            })
            .collect();

        tracing::info!(count, parallel, "generating dataset");
        if parallel {
            jobs.into_par_iter()
                .map(|(id, task, prompt)| self.build(&id, task, prompt))
                .collect()
        } else {
            jobs.into_iter()
                .map(|(id, task, prompt)| self.build(&id, task, prompt))
                .collect()
        }
    }

    fn next_prompt(&self, task: &TaskSpec) -> &'static str {
        let mut rng = self
            .prompt_rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        prompts::prompt_for(task.transformation_type().as_str(), &mut *rng)
    }

    #[tracing::instrument(level = "debug", skip(self, task, prompt))]
    fn build(&self, task_id: &str, task: TaskSpec, prompt: &str) -> AnalogonResult<TaskPair> {
        let first_image = self.painter.render_initial(&task)?;
        let final_image = self.painter.render_final(&task)?;

        let ground_truth_video = if self.config.generate_videos {
            self.render_video(task_id, &task, &first_image, &final_image)
        } else {
            None
        };

        tracing::info!(
            task_id,
            description = task.description(),
            video = ground_truth_video.is_some(),
            "task generated"
        );
        Ok(TaskPair {
            task_id: task_id.to_string(),
            domain: self.config.domain.clone(),
            prompt: prompt.to_string(),
            first_image,
            final_image,
            ground_truth_video,
            task,
        })
    }

    fn render_video(
        &self,
        task_id: &str,
        task: &TaskSpec,
        first: &FrameRGBA,
        fin: &FrameRGBA,
    ) -> Option<PathBuf> {
        let clip = self.config.fps().and_then(|fps| {
            let frames =
                animation::synthesize_between(&self.painter, task, first, fin, self.config.plan())?;
            Ok::<_, AnalogonError>((fps, frames))
        });
        match clip {
            Ok((fps, frames)) => {
                let out = self
                    .config
                    .video_dir()
                    .join(format!("{task_id}_ground_truth.mp4"));
                encode::encode_frames(&frames, fps, &out)
            }
            Err(e) => {
                tracing::warn!(task_id, error = %e, "clip synthesis failed, no video");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/generator.rs"]
mod tests;
