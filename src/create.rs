use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use mpgen::manifest::Manifest;
use mpgen::project::ProjectLayout;
use mpgen::render::Renderer;
use mpgen::request::{self, CreationRequest, Kind, PageOption};
use mpgen::scaffold;
use mpgen::scratch::Scratch;

use crate::prompt;
use crate::App;

impl App {
    pub(crate) fn create(&self) -> Result<()> {
        let layout = ProjectLayout::locate().context("failed to locate project root")?;

        if !layout.has_sentinel() {
            let proceed = prompt::confirm(
                "This directory does not look like a mini-program project root. Continue anyway?",
                false,
            );
            if !proceed {
                println!("Nothing created.");
                return Ok(());
            }
            layout
                .ensure_dirs()
                .context("failed to create the pages/components directories")?;
        }

        let request = collect_request(&layout);

        let scratch = Scratch::at(self.config.scratch.clone());
        scratch.clear().context("failed to clear scratch directory")?;

        let spinner = spinner()?;
        spinner.set_message(format!("Fetching the {} template...", request.kind));
        let outcome = self.scaffold(&layout, &request, &scratch, &spinner);
        scratch.clear().context("failed to clear scratch directory")?;

        match outcome {
            Ok(target) => {
                spinner.finish_and_clear();
                println!(
                    "{} Created {} '{}' at {}",
                    style("✓").green().bold(),
                    request.kind,
                    style(&request.name).cyan(),
                    target.display(),
                );
                if request.kind == Kind::Page {
                    println!(
                        "{} Registered {} in app.json",
                        style("✓").green().bold(),
                        style(request.logical_path()).cyan(),
                    );
                }
                Ok(())
            }
            Err(err) => {
                spinner.finish_with_message(format!("{}", style("✗ creation failed").red().bold()));
                Err(err)
            }
        }
    }

    fn scaffold(
        &self,
        layout: &ProjectLayout,
        request: &CreationRequest,
        scratch: &Scratch,
        spinner: &ProgressBar,
    ) -> Result<PathBuf> {
        let source = self.config.source()?;
        let checkout = source
            .fetch(request.kind.branch(), scratch.path())
            .with_context(|| format!("failed to fetch template from {source}"))?;

        spinner.set_message("Rendering the template...");
        let renderer =
            Renderer::load(checkout.join("template")).context("failed to load template bundle")?;
        let artifact = renderer
            .render(request)
            .context("failed to render template")?;

        spinner.set_message("Writing files...");
        let target = scaffold::write_entity(layout, request, &artifact)
            .context("failed to write entity files")?;

        if request.kind == Kind::Page {
            let mut manifest = Manifest::load(layout.root()).context("failed to read app.json")?;
            manifest
                .register(&request.logical_path())
                .context("failed to register page in app.json")?;
            manifest.save().context("failed to write app.json")?;
        }

        Ok(target)
    }
}

fn collect_request(layout: &ProjectLayout) -> CreationRequest {
    let kind = prompt::select("Create a page or a component?", &Kind::ALL);

    let kind_dir = layout.dir_for(kind).to_path_buf();
    let name = prompt::input(format!("Enter the {kind} name"), move |input: &String| {
        request::validate_name(&kind_dir, input).map(|_| ())
    });
    let name = name.trim().to_string();

    let options = if kind == Kind::Page {
        let defaults = PageOption::ALL
            .iter()
            .map(|option| option.default_selected())
            .collect::<Vec<_>>();
        prompt::multi_select(
            "Select page initialization options:",
            &PageOption::ALL,
            &defaults,
        )
    } else {
        Vec::new()
    };

    CreationRequest {
        kind,
        name,
        options,
    }
}

fn spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("failed to set progress style")?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}
