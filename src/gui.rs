use std::{
    borrow::Cow,
    ops::{Deref, DerefMut},
    time::Duration,
};

use anyhow::{anyhow, Context as _, Result};
use sdl2::{
    event::{Event, WindowEvent},
    gfx::primitives::DrawRenderer,
    keyboard::Keycode,
    pixels::Color as SdlColor,
    rect::Rect,
    render::{Canvas, Texture, TextureCreator},
    ttf::Font,
    video::{Window, WindowContext},
};

use crate::{
    command::Command,
    config::Config,
    layout::{Layout, NODE_RADIUS},
    session::Session,
};

const BACKGROUND: SdlColor = SdlColor {
    r: 250,
    g: 250,
    b: 250,
    a: 255,
};
const EDGE: SdlColor = SdlColor {
    r: 100,
    g: 100,
    b: 100,
    a: 255,
};
const NODE_FILL: SdlColor = SdlColor {
    r: 70,
    g: 130,
    b: 180,
    a: 255,
};
const NODE_BORDER: SdlColor = SdlColor {
    r: 25,
    g: 25,
    b: 112,
    a: 255,
};
const STATUS: SdlColor = SdlColor {
    r: 0,
    g: 0,
    b: 200,
    a: 255,
};
const TEXT: SdlColor = SdlColor {
    r: 20,
    g: 20,
    b: 20,
    a: 255,
};

/// Text textures are rebuilt from scratch once this many are cached.
const TEXT_CACHE_LIMIT: usize = 512;

pub fn run(config: &Config, session: Session) -> Result<()> {
    let font_path = config
        .font
        .as_deref()
        .context("SEGTREE_FONT must point to a TTF font to open the window")?;

    let sdl = sdl2::init().map_err(|e| anyhow!("failed to initialize sdl: {}", e))?;
    let video = sdl
        .video()
        .map_err(|e| anyhow!("failed to initialize video subsystem: {}", e))?;
    let ttf = sdl2::ttf::init().context("failed to initialize ttf subsystem")?;

    let node_font = ttf
        .load_font(font_path, 16)
        .map_err(|e| anyhow!("failed to load font {}: {}", font_path, e))?;
    let line_font = ttf
        .load_font(font_path, 18)
        .map_err(|e| anyhow!("failed to load font {}: {}", font_path, e))?;

    let mut canvas = video
        .window(
            "Segment Tree Visualizer",
            config.window_width,
            config.window_height,
        )
        .position_centered()
        .resizable()
        .build()
        .context("failed to build window")?
        .into_canvas()
        .build()
        .context("failed to build canvas")?;

    let texture_creator = canvas.texture_creator();
    video.text_input().start();

    let mut state = GuiState {
        running: true,
        window_size: (config.window_width, config.window_height),
        session,
        input: String::new(),
        status: "tree initialised with default values".to_string(),
    };

    let mut renderer = Renderer {
        canvas: &mut canvas,
        texture_creator: &texture_creator,
        node_font: &node_font,
        line_font: &line_font,
        text_cache: vec![],
    };

    tracing::info!("window opened");

    let mut event_pump = sdl
        .event_pump()
        .map_err(|e| anyhow!("failed to obtain event pump: {}", e))?;

    while state.running {
        for event in event_pump.poll_iter() {
            state.process_sdl_event(&event);
        }

        renderer.set_draw_color(BACKGROUND);
        renderer.clear();
        renderer.render_tree(&state)?;
        renderer.render_lines(&state)?;
        renderer.present();

        // 60fps
        std::thread::sleep(Duration::from_secs_f64(1.0 / 60.0));
    }

    tracing::info!("window closed");
    Ok(())
}

struct GuiState {
    running: bool,
    window_size: (u32, u32),
    session: Session,
    input: String,
    status: String,
}

impl GuiState {
    fn process_sdl_event(&mut self, event: &Event) {
        use Event::*;

        match event {
            &Window {
                win_event: WindowEvent::Resized(w, h),
                ..
            } => {
                self.window_size = (w as u32, h as u32);
            }

            Quit { .. }
            | KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => {
                self.running = false;
            }

            TextInput { text, .. } => {
                self.input.push_str(text);
            }

            KeyDown {
                keycode: Some(Keycode::Backspace),
                ..
            } => {
                self.input.pop();
            }

            KeyDown {
                keycode: Some(Keycode::Return | Keycode::KpEnter),
                ..
            } => {
                let line = std::mem::take(&mut self.input);
                self.submit(&line);
            }

            _ => {}
        }
    }

    fn submit(&mut self, line: &str) {
        let result = Command::parse(line).and_then(|c| self.session.apply(c));

        match result {
            // the help text does not fit on the status line
            Ok(outcome) if outcome.status.contains('\n') => {
                self.status = outcome.status.lines().collect::<Vec<_>>().join(" | ");
            }
            Ok(outcome) => self.status = outcome.status,
            Err(e) => self.status = format!("error: {:#}", e),
        }

        if self.session.is_quit() {
            self.running = false;
        }
    }
}

struct TextEntry<'a> {
    text: String,
    color: SdlColor,
    big: bool,
    texture: Texture<'a>,
}

struct Renderer<'a> {
    canvas: &'a mut Canvas<Window>,
    texture_creator: &'a TextureCreator<WindowContext>,
    node_font: &'a Font<'a, 'static>,
    line_font: &'a Font<'a, 'static>,
    text_cache: Vec<TextEntry<'a>>,
}

impl Deref for Renderer<'_> {
    type Target = Canvas<Window>;

    fn deref(&self) -> &Self::Target {
        self.canvas
    }
}

impl DerefMut for Renderer<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.canvas
    }
}

impl<'a> Renderer<'a> {
    /// Draws `text` with its top-left corner at `pos`, or centred on `pos` when `centered`.
    fn render_text(
        &mut self,
        text: impl Into<Cow<'a, str>>,
        pos: (i32, i32),
        color: SdlColor,
        big: bool,
        centered: bool,
    ) -> Result<()> {
        let text = text.into();

        if self.text_cache.len() > TEXT_CACHE_LIMIT {
            self.text_cache.clear();
        }

        let cached = self
            .text_cache
            .iter()
            .position(|x| x.text == text && x.color == color && x.big == big);

        let index = match cached {
            Some(i) => i,
            None => {
                let font = if big { self.line_font } else { self.node_font };

                let surface = font
                    .render(&text)
                    .blended(color)
                    .map_err(|e| anyhow!("failed to render text: {}", e))?;
                let texture = self
                    .texture_creator
                    .create_texture_from_surface(surface)
                    .map_err(|e| anyhow!("failed to create texture: {}", e))?;

                self.text_cache.push(TextEntry {
                    text: text.into_owned(),
                    color,
                    big,
                    texture,
                });
                self.text_cache.len() - 1
            }
        };

        let texture = &self.text_cache[index].texture;
        let query = texture.query();
        let (x, y) = if centered {
            (
                pos.0 - query.width as i32 / 2,
                pos.1 - query.height as i32 / 2,
            )
        } else {
            pos
        };
        let rect = Rect::new(x, y, query.width, query.height);

        self.canvas
            .copy(texture, None, rect)
            .map_err(|e| anyhow!("failed to copy text: {}", e))
    }

    fn render_tree(&mut self, state: &GuiState) -> Result<()> {
        let (width, height) = state.window_size;
        let layout = Layout::of(state.session.tree().raw_nodes());
        let canvas_nodes = layout.to_canvas(width, height);
        // canvas nodes keep the layout's emission order
        let center_of = |index: usize| layout.position(index).map(|p| canvas_nodes[p].center);

        // edges first so that circles are drawn over them
        for (parent, child) in layout.edges() {
            if let (Some(p), Some(c)) = (center_of(parent.index), center_of(child.index)) {
                self.canvas
                    .thick_line(p.0 as i16, p.1 as i16, c.0 as i16, c.1 as i16, 2, EDGE)
                    .map_err(|e| anyhow!("failed to draw edge: {}", e))?;
            }
        }

        for node in &canvas_nodes {
            let (x, y) = (node.center.0 as i16, node.center.1 as i16);
            self.canvas
                .filled_circle(x, y, NODE_RADIUS as i16, NODE_FILL)
                .map_err(|e| anyhow!("failed to draw node: {}", e))?;
            self.canvas
                .aa_circle(x, y, NODE_RADIUS as i16, NODE_BORDER)
                .map_err(|e| anyhow!("failed to draw node: {}", e))?;
            self.render_text(
                node.value.to_string(),
                node.center,
                SdlColor::WHITE,
                false,
                true,
            )?;
        }

        Ok(())
    }

    fn render_lines(&mut self, state: &GuiState) -> Result<()> {
        let bottom = state.window_size.1 as i32;

        self.render_text(state.session.array_line(), (10, bottom - 90), TEXT, true, false)?;
        if !state.status.is_empty() {
            self.render_text(state.status.clone(), (10, bottom - 60), STATUS, true, false)?;
        }
        self.render_text(format!("> {}", state.input), (10, bottom - 30), TEXT, true, false)
    }
}
