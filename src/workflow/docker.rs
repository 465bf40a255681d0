// file: src/workflow/docker.rs
// version: 1.0.0
// guid: 9c408fd5-723c-4eed-1cf6-4d682b1945b7

//! Container workflow: build the image, then run it (lenient)

use crate::config::WorkflowConfig;
use crate::exec::{Step, WorkflowPlan};

/// Compile the `-docker` workflow
pub fn plan(config: &WorkflowConfig) -> WorkflowPlan {
    let image = config.docker_image_ref();
    let publish = format!("{}:{}", config.docker.port, config.docker.port);
    let mut plan = WorkflowPlan::new("docker");

    plan.push(Step::lenient(
        config.docker.engine.as_str(),
        ["build", "-t", image.as_str(), config.docker.context.as_str()],
        "build container image",
    ));
    plan.push(Step::lenient(
        config.docker.engine.as_str(),
        ["run", "--rm", "-p", publish.as_str(), image.as_str()],
        "run container",
    ));

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docker_plan_sequence() {
        let config = WorkflowConfig::default();
        let plan = plan(&config);

        let commands: Vec<String> = plan.steps.iter().map(|s| s.command_line()).collect();
        assert_eq!(
            commands,
            vec![
                "docker build -t app:latest .",
                "docker run --rm -p 8000:8000 app:latest",
            ]
        );
        assert!(!plan.is_strict());
    }

    #[test]
    fn test_alternate_engine_and_image() {
        let mut config = WorkflowConfig::default();
        config.docker.engine = "podman".to_string();
        config.docker.image = "flow".to_string();
        config.docker.tag = "dev".to_string();
        config.docker.port = 8181;

        let plan = plan(&config);
        assert_eq!(plan.steps[0].command_line(), "podman build -t flow:dev .");
        assert_eq!(
            plan.steps[1].command_line(),
            "podman run --rm -p 8181:8181 flow:dev"
        );
    }
}
