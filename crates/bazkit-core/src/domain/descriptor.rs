//! Bazel build descriptors: detection and minimal stubs.
//!
//! Dependency kinds are detected by probing marker files in a fixed order;
//! the first kind whose marker exists wins.

use std::fmt;

use serde::Serialize;

use crate::domain::skeleton::SkeletonVariant;

/// File names Bazel accepts as a package's build descriptor, in lookup order.
pub const BUILD_DESCRIPTORS: [&str; 2] = ["BUILD.bazel", "BUILD"];

/// Name used for every descriptor this tool writes.
pub const GENERATED_DESCRIPTOR: &str = "BUILD.bazel";

/// Build system a fetched dependency uses natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Gradle,
    Npm,
}

/// Detection predicates, in priority order.
pub const DEPENDENCY_PROBES: &[(DependencyKind, &[&str])] = &[
    (DependencyKind::Gradle, &["build.gradle", "build.gradle.kts"]),
    (DependencyKind::Npm, &["package.json"]),
];

impl DependencyKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gradle => "gradle",
            Self::Npm => "npm",
        }
    }

    /// Probe with `exists` (called with file names relative to the
    /// dependency directory). First match wins.
    pub fn detect(exists: impl Fn(&str) -> bool) -> Option<Self> {
        DEPENDENCY_PROBES
            .iter()
            .find(|(_, markers)| markers.iter().any(|m| exists(m)))
            .map(|(kind, _)| *kind)
    }

    /// Minimal `BUILD.bazel` exposing the dependency under `target_name`.
    pub fn stub(&self, target_name: &str) -> String {
        match self {
            Self::Gradle => format!(
                "load(\"@rules_java//java:defs.bzl\", \"java_library\")\n\
                 \n\
                 java_library(\n\
                 \x20   name = \"{target_name}\",\n\
                 \x20   srcs = glob([\"src/main/java/**/*.java\"]),\n\
                 \x20   resources = glob([\"src/main/resources/**\"]),\n\
                 \x20   visibility = [\"//visibility:public\"],\n\
                 )\n"
            ),
            Self::Npm => format!(
                "filegroup(\n\
                 \x20   name = \"{target_name}\",\n\
                 \x20   srcs = glob(\n\
                 \x20       [\"**\"],\n\
                 \x20       exclude = [\"node_modules/**\", \"BUILD.bazel\"],\n\
                 \x20   ),\n\
                 \x20   visibility = [\"//visibility:public\"],\n\
                 )\n"
            ),
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First existing build descriptor, if any.
pub fn find_descriptor(exists: impl Fn(&str) -> bool) -> Option<&'static str> {
    BUILD_DESCRIPTORS.into_iter().find(|name| exists(name))
}

/// `BUILD.bazel` wiring a freshly generated skeleton into the workspace.
pub fn skeleton_stub(variant: SkeletonVariant, target_name: &str) -> String {
    match variant {
        SkeletonVariant::Kotlin => format!(
            "load(\"@rules_kotlin//kotlin:jvm.bzl\", \"kt_jvm_binary\", \"kt_jvm_library\")\n\
             \n\
             kt_jvm_library(\n\
             \x20   name = \"{target_name}_lib\",\n\
             \x20   srcs = glob([\"src/main/kotlin/**/*.kt\"]),\n\
             )\n\
             \n\
             kt_jvm_binary(\n\
             \x20   name = \"{target_name}\",\n\
             \x20   main_class = \"MainKt\",\n\
             \x20   runtime_deps = [\":{target_name}_lib\"],\n\
             \x20   visibility = [\"//visibility:public\"],\n\
             )\n"
        ),
        SkeletonVariant::Java => format!(
            "load(\"@rules_java//java:defs.bzl\", \"java_binary\")\n\
             \n\
             java_binary(\n\
             \x20   name = \"{target_name}\",\n\
             \x20   srcs = glob([\"src/main/java/**/*.java\"]),\n\
             \x20   main_class = \"Main\",\n\
             \x20   visibility = [\"//visibility:public\"],\n\
             )\n"
        ),
        SkeletonVariant::CdkApp | SkeletonVariant::CdkConstruct => format!(
            "filegroup(\n\
             \x20   name = \"{target_name}\",\n\
             \x20   srcs = glob(\n\
             \x20       [\"bin/**/*.ts\", \"lib/**/*.ts\", \"*.json\"],\n\
             \x20       allow_empty = True,\n\
             \x20   ),\n\
             \x20   visibility = [\"//visibility:public\"],\n\
             )\n"
        ),
        SkeletonVariant::Expo | SkeletonVariant::Bare => format!(
            "filegroup(\n\
             \x20   name = \"{target_name}\",\n\
             \x20   srcs = glob(\n\
             \x20       [\"**\"],\n\
             \x20       exclude = [\"node_modules/**\", \"ios/Pods/**\", \"android/build/**\"],\n\
             \x20   ),\n\
             \x20   visibility = [\"//visibility:public\"],\n\
             )\n"
        ),
    }
}
