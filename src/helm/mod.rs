//! Chart rendering through the Helm CLI
//!
//! The visualizer never templates charts itself. It runs `helm template`
//! once, waits for the full output and hands the text to the parser.

use crate::config::schema::HelmConfig;
use crate::error::{VisualizerError, VisualizerResult};
use crate::index::index_resources;
use crate::manifest::parse_documents;
use crate::tree::{TreeNode, build_tree};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

/// Produces the rendered manifest stream for a chart directory
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChartRenderer: Send + Sync {
    /// Render `chart` and return its standard output verbatim
    async fn render(&self, chart: &Path) -> VisualizerResult<String>;
}

/// Renders charts by running the `helm` binary
#[derive(Debug, Clone)]
pub struct HelmCli {
    binary: PathBuf,
    extra_args: Vec<String>,
    timeout: Option<Duration>,
}

impl HelmCli {
    /// Create a renderer from the `helm` configuration section
    pub fn new(config: &HelmConfig) -> Self {
        Self {
            binary: PathBuf::from(&config.binary),
            extra_args: config.extra_args.clone(),
            timeout: (config.timeout_seconds > 0)
                .then(|| Duration::from_secs(config.timeout_seconds)),
        }
    }

    /// Arguments passed to the binary for `chart`; the path is passed as is
    pub fn args(&self, chart: &Path) -> Vec<OsString> {
        let mut args = vec![OsString::from("template")];
        args.extend(self.extra_args.iter().map(OsString::from));
        args.push(chart.as_os_str().to_os_string());
        args
    }
}

#[async_trait]
impl ChartRenderer for HelmCli {
    async fn render(&self, chart: &Path) -> VisualizerResult<String> {
        let args = self.args(chart);
        tracing::debug!(
            "Running {} {}",
            self.binary.display(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let child = tokio::process::Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(VisualizerError::HelmSpawn)?;

        let started = Instant::now();
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| VisualizerError::HelmTimeout {
                    seconds: limit.as_secs(),
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(VisualizerError::HelmSpawn)?;

        tracing::debug!(
            "helm finished with {} after {:?} ({} bytes of output)",
            output.status,
            started.elapsed(),
            output.stdout.len()
        );

        if !output.status.success() {
            return Err(VisualizerError::HelmFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Render a chart and build its relationship tree
pub async fn visualize_chart(
    renderer: &dyn ChartRenderer,
    chart: &Path,
) -> VisualizerResult<TreeNode> {
    let rendered = renderer.render(chart).await?;
    let documents = parse_documents(&rendered)?;
    let index = index_resources(documents);
    Ok(build_tree(&index)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkError;

    const WEB_CHART: &str = r#"---
# Source: web/templates/configmap.yaml
apiVersion: v1
kind: ConfigMap
metadata:
  name: web-cfg
---
# Source: web/templates/deployment.yaml
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
spec:
  template:
    metadata:
      labels:
        app: web
    spec:
      volumes:
        - name: config
          configMap:
            name: web-cfg
"#;

    fn helm_config(binary: &str, timeout_seconds: u64) -> HelmConfig {
        HelmConfig {
            binary: binary.to_string(),
            timeout_seconds,
            extra_args: vec!["--namespace".to_string(), "prod".to_string()],
        }
    }

    #[test]
    fn test_args_put_chart_last() {
        let helm = HelmCli::new(&helm_config("helm", 0));
        assert_eq!(
            helm.args(Path::new("./charts/web")),
            vec!["template", "--namespace", "prod", "./charts/web"]
        );
        assert!(helm.timeout.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_args_keep_non_utf8_chart_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let chart = Path::new(OsStr::from_bytes(b"charts/caf\xe9"));
        let helm = HelmCli::new(&helm_config("helm", 0));
        let args = helm.args(chart);
        assert_eq!(args.last().map(OsString::as_os_str), Some(chart.as_os_str()));
    }

    #[tokio::test]
    async fn test_visualize_with_mock_renderer() {
        let mut renderer = MockChartRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|_| Ok(WEB_CHART.to_string()));

        let tree = visualize_chart(&renderer, Path::new("web")).await.unwrap();
        let web = tree
            .find_child("Deployments")
            .and_then(|d| d.find_child("web"))
            .unwrap();
        assert_eq!(web.child_labels(), vec!["ConfigMap: web-cfg"]);
        assert!(tree.find_child("ConfigMaps").is_some());
    }

    #[tokio::test]
    async fn test_renderer_failure_is_propagated() {
        let mut renderer = MockChartRenderer::new();
        renderer.expect_render().returning(|_| {
            Err(VisualizerError::HelmTimeout { seconds: 5 })
        });

        let err = visualize_chart(&renderer, Path::new("web")).await.unwrap_err();
        assert!(matches!(err, VisualizerError::HelmTimeout { seconds: 5 }));
    }

    #[tokio::test]
    async fn test_malformed_reference_aborts() {
        let mut renderer = MockChartRenderer::new();
        renderer.expect_render().returning(|_| {
            Ok("kind: Deployment\nmetadata:\n  name: web\nspec:\n  template:\n    spec:\n      containers:\n        - name: app\n          env:\n            - name: A\n              valueFrom:\n                configMapKeyRef:\n                  key: a\n".to_string())
        });

        let err = visualize_chart(&renderer, Path::new("web")).await.unwrap_err();
        assert!(matches!(
            err,
            VisualizerError::Link(LinkError::MissingReferenceName { .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_binary() {
        let helm = HelmCli::new(&helm_config("/nonexistent/helmviz-test/helm", 5));
        let err = helm.render(Path::new(".")).await.unwrap_err();
        assert!(matches!(err, VisualizerError::HelmSpawn(_)));
    }

    #[cfg(unix)]
    mod fake_helm {
        use super::*;
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        /// Linux `ETXTBSY`
        const TEXT_FILE_BUSY: i32 = 26;

        // The script is written under a temporary name and closed before it
        // is moved into place, so no writable descriptor refers to `helm`.
        fn script(dir: &tempfile::TempDir, body: &str) -> String {
            let path = dir.path().join("helm");
            let mut file = tempfile::NamedTempFile::new_in(dir.path()).unwrap();
            writeln!(file, "#!/bin/sh\n{}", body).unwrap();
            file.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o755))
                .unwrap();
            drop(file.persist(&path).unwrap());
            path.display().to_string()
        }

        // A test thread forking concurrently can still hold the script's
        // descriptor for a moment between fork and exec.
        async fn render(helm: &HelmCli, chart: &str) -> VisualizerResult<String> {
            for _ in 0..20 {
                match helm.render(Path::new(chart)).await {
                    Err(VisualizerError::HelmSpawn(e))
                        if e.raw_os_error() == Some(TEXT_FILE_BUSY) =>
                    {
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    }
                    result => return result,
                }
            }
            helm.render(Path::new(chart)).await
        }

        #[tokio::test]
        async fn test_successful_render_returns_stdout() {
            let dir = tempfile::tempdir().unwrap();
            let binary = script(&dir, "echo \"kind: ConfigMap\"\necho \"args: $*\"");
            let helm = HelmCli::new(&helm_config(&binary, 10));

            let out = render(&helm, "mychart").await.unwrap();
            assert!(out.contains("kind: ConfigMap"));
            assert!(out.contains("args: template --namespace prod mychart"));
        }

        #[tokio::test]
        async fn test_non_zero_exit_reports_stderr() {
            let dir = tempfile::tempdir().unwrap();
            let binary = script(&dir, "echo 'Error: Chart.yaml file is missing' >&2\nexit 1");
            let helm = HelmCli::new(&helm_config(&binary, 10));

            match render(&helm, "mychart").await {
                Err(VisualizerError::HelmFailed { status, stderr }) => {
                    assert!(!status.success());
                    assert_eq!(stderr, "Error: Chart.yaml file is missing");
                }
                other => panic!("expected HelmFailed, got {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_timeout() {
            let dir = tempfile::tempdir().unwrap();
            let binary = script(&dir, "exec sleep 30");
            let helm = HelmCli::new(&helm_config(&binary, 1));

            let err = render(&helm, "mychart").await.unwrap_err();
            assert!(matches!(err, VisualizerError::HelmTimeout { seconds: 1 }));
        }

        #[tokio::test]
        async fn test_non_utf8_output_is_rejected() {
            let dir = tempfile::tempdir().unwrap();
            let binary = script(&dir, "printf 'kind: ConfigMap\\n# \\377\\n'");
            let helm = HelmCli::new(&helm_config(&binary, 10));

            let err = render(&helm, "mychart").await.unwrap_err();
            assert!(matches!(err, VisualizerError::NonUtf8Output(_)));
        }
    }
}
