//! SDL2 window, input and frame pacing.
//!
//! SDL is only used to get pixels on screen: the frame is rendered on the
//! CPU and uploaded into a streaming ARGB8888 texture every frame.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::error::{Error, Result};
use crate::scene::RenderMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
    SetRenderMode(RenderMode),
    ToggleRenderMode,
}

/// Milliseconds a frame may take to hit `fps`.
pub fn frame_budget_ms(fps: u32) -> u64 {
    1000 / u64::from(fps.max(1))
}

/// Caps the frame rate by sleeping out the rest of each frame's budget.
pub struct FrameLimiter {
    target_fps: Option<u32>,
    previous_frame_time: u64,
}

impl FrameLimiter {
    /// `target_fps` of `None` never sleeps.
    pub fn new(window: &Window, target_fps: Option<u32>) -> Self {
        Self {
            target_fps,
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// How long to sleep after a frame that took `elapsed_ms`.
    fn remaining_ms(&self, elapsed_ms: u64) -> Option<u64> {
        let budget = frame_budget_ms(self.target_fps?);
        (elapsed_ms < budget).then(|| budget - elapsed_ms)
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    /// Delta time represents the time elapsed since the last call to this method.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time.saturating_sub(self.previous_frame_time);

        if let Some(time_to_wait) = self.remaining_ms(delta_time) {
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time.saturating_sub(self.previous_frame_time);
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

/// Counts frames and reports the rate once per second.
#[derive(Debug, Default)]
pub struct FpsCounter {
    frames: u32,
    elapsed_ms: u64,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame. Returns the frame rate when a full second has passed.
    pub fn tick(&mut self, delta_ms: u64) -> Option<u32> {
        self.frames += 1;
        self.elapsed_ms += delta_ms;
        if self.elapsed_ms < 1000 {
            return None;
        }
        let fps = (u64::from(self.frames) * 1000 / self.elapsed_ms) as u32;
        self.frames = 0;
        self.elapsed_ms = 0;
        Some(fps)
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Field order matters: `texture` must drop before `texture_creator`.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    title: String,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(Error::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(Error::Sdl)?;
        let timer_subsystem = sdl_context.timer().map_err(Error::Sdl)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(Error::Sdl)?;

        let texture = Self::create_texture(&texture_creator, width, height)?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            title: title.to_string(),
            width,
            height,
        })
    }

    fn create_texture(
        texture_creator: &sdl2::render::TextureCreator<sdl2::video::WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<sdl2::render::Texture<'static>> {
        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // We ensure texture is dropped before texture_creator by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator as *const _) };
        texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| Error::Texture(e.to_string()))
    }

    pub fn poll_events(&mut self) -> WindowEvent {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => return WindowEvent::Resize(w.max(1) as u32, h.max(1) as u32),
                Event::KeyDown {
                    keycode: Some(Keycode::Num1),
                    ..
                } => return WindowEvent::SetRenderMode(RenderMode::Wireframe),
                Event::KeyDown {
                    keycode: Some(Keycode::Num2),
                    ..
                } => return WindowEvent::SetRenderMode(RenderMode::Solid),
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    repeat: false,
                    ..
                } => return WindowEvent::ToggleRenderMode,
                _ => {}
            }
        }
        WindowEvent::None
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<()> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| Error::Present(e.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))
            .map_err(Error::Present)?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.texture = Self::create_texture(&self.texture_creator, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Shows the frame rate next to the window title.
    pub fn show_fps(&mut self, fps: u32) -> Result<()> {
        let title = format!("{} - {fps} FPS", self.title);
        self.canvas
            .window_mut()
            .set_title(&title)
            .map_err(|e| Error::Window(e.to_string()))
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
