//! Skeleton layouts compiled into the binary.
//!
//! Paths and contents may use the placeholder tokens `__PROJECT_NAME__`,
//! `__PACKAGE__`, `__PACKAGE_PATH__` and `__ORG__`. Mobile layouts are small
//! overlays: the external generator writes the project itself and any file
//! it created wins over the overlay.

use bazkit_core::domain::{SkeletonLayout, SkeletonVariant, TemplateFile};

/// The built-in layout for `variant`.
pub fn layout(variant: SkeletonVariant) -> SkeletonLayout {
    match variant {
        SkeletonVariant::Kotlin => kotlin(),
        SkeletonVariant::Java => java(),
        SkeletonVariant::CdkApp => cdk_app(),
        SkeletonVariant::CdkConstruct => cdk_construct(),
        SkeletonVariant::Expo => mobile_overlay(variant, &["node_modules", ".expo"]),
        SkeletonVariant::Bare => mobile_overlay(
            variant,
            &["node_modules", "ios/Pods", "ios/build", "android/build", "android/app/build"],
        ),
    }
}

// ── JVM ───────────────────────────────────────────────────────────────────────

const GRADLE_GITIGNORE: &str = ".gradle/\nbuild/\n*.class\n.idea/\n";

fn kotlin() -> SkeletonLayout {
    SkeletonLayout::new(SkeletonVariant::Kotlin)
        .with_file(TemplateFile::new(
            "settings.gradle.kts",
            "rootProject.name = \"__PROJECT_NAME__\"\n",
        ))
        .with_file(TemplateFile::new(
            "build.gradle.kts",
            r#"plugins {
    kotlin("jvm") version "2.0.21"
    application
}

group = "__PACKAGE__"
version = "0.1.0"

repositories {
    mavenCentral()
}

application {
    mainClass.set("MainKt")
}
"#,
        ))
        .with_file(TemplateFile::new(
            "src/main/kotlin/Main.kt",
            "fun main() {\n    println(\"Hello from __PROJECT_NAME__\")\n}\n",
        ))
        .with_file(TemplateFile::new(".gitignore", GRADLE_GITIGNORE))
        .with_file(TemplateFile::new(
            "README.md",
            "# __PROJECT_NAME__\n\nKotlin service owned by __ORG__.\n\n\
             Build with Gradle (`gradle run`) or Bazel (`bazel build //__PROJECT_NAME__`).\n",
        ))
}

fn java() -> SkeletonLayout {
    SkeletonLayout::new(SkeletonVariant::Java)
        .with_file(TemplateFile::new(
            "settings.gradle.kts",
            "rootProject.name = \"__PROJECT_NAME__\"\n",
        ))
        .with_file(TemplateFile::new(
            "build.gradle.kts",
            r#"plugins {
    java
    application
}

group = "__PACKAGE__"
version = "0.1.0"

repositories {
    mavenCentral()
}

application {
    mainClass.set("Main")
}
"#,
        ))
        .with_file(TemplateFile::new(
            "src/main/java/Main.java",
            r#"public class Main {
    public static void main(String[] args) {
        System.out.println("Hello from __PROJECT_NAME__");
    }
}
"#,
        ))
        .with_file(TemplateFile::new(".gitignore", GRADLE_GITIGNORE))
        .with_file(TemplateFile::new(
            "README.md",
            "# __PROJECT_NAME__\n\nJava service owned by __ORG__.\n\n\
             Build with Gradle (`gradle run`) or Bazel (`bazel build //__PROJECT_NAME__`).\n",
        ))
}

// ── Infrastructure (AWS CDK) ──────────────────────────────────────────────────

const CDK_GITIGNORE: &str = "node_modules/\ncdk.out/\n*.js\n*.d.ts\n";

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "module": "commonjs",
    "lib": ["es2020"],
    "declaration": true,
    "strict": true,
    "esModuleInterop": true
  },
  "exclude": ["node_modules", "cdk.out"]
}
"#;

fn cdk_app() -> SkeletonLayout {
    SkeletonLayout::new(SkeletonVariant::CdkApp)
        .with_file(TemplateFile::new(
            "package.json",
            r#"{
  "name": "__PROJECT_NAME__",
  "version": "0.1.0",
  "private": true,
  "bin": { "__PROJECT_NAME__": "bin/__PROJECT_NAME__.js" },
  "scripts": {
    "build": "tsc",
    "cdk": "cdk"
  },
  "devDependencies": {
    "aws-cdk": "^2.160.0",
    "ts-node": "^10.9.2",
    "typescript": "~5.6.0"
  },
  "dependencies": {
    "aws-cdk-lib": "^2.160.0",
    "constructs": "^10.0.0"
  }
}
"#,
        ))
        .with_file(TemplateFile::new(
            "cdk.json",
            "{\n  \"app\": \"npx ts-node --prefer-ts-exts bin/__PROJECT_NAME__.ts\"\n}\n",
        ))
        .with_file(TemplateFile::new("tsconfig.json", TSCONFIG))
        .with_file(TemplateFile::new(
            "bin/__PROJECT_NAME__.ts",
            r#"#!/usr/bin/env node
import * as cdk from 'aws-cdk-lib';
import { AppStack } from '../lib/__PROJECT_NAME__-stack';

const app = new cdk.App();
new AppStack(app, '__PROJECT_NAME__');
"#,
        ))
        .with_file(TemplateFile::new(
            "lib/__PROJECT_NAME__-stack.ts",
            r#"import * as cdk from 'aws-cdk-lib';
import { Construct } from 'constructs';

export class AppStack extends cdk.Stack {
  constructor(scope: Construct, id: string, props?: cdk.StackProps) {
    super(scope, id, props);
    cdk.Tags.of(this).add('owner', '__ORG__');
  }
}
"#,
        ))
        .with_file(TemplateFile::new(".gitignore", CDK_GITIGNORE))
        .with_file(TemplateFile::new(
            "README.md",
            "# __PROJECT_NAME__\n\nAWS CDK app owned by __ORG__.\n\n\
             `npm install`, then `npx cdk synth`.\n",
        ))
}

fn cdk_construct() -> SkeletonLayout {
    SkeletonLayout::new(SkeletonVariant::CdkConstruct)
        .with_file(TemplateFile::new(
            "package.json",
            r#"{
  "name": "@__ORG__/__PROJECT_NAME__",
  "version": "0.1.0",
  "main": "lib/index.js",
  "types": "lib/index.d.ts",
  "scripts": {
    "build": "tsc"
  },
  "devDependencies": {
    "typescript": "~5.6.0"
  },
  "peerDependencies": {
    "aws-cdk-lib": "^2.160.0",
    "constructs": "^10.0.0"
  }
}
"#,
        ))
        .with_file(TemplateFile::new("tsconfig.json", TSCONFIG))
        .with_file(TemplateFile::new(
            "lib/index.ts",
            r#"import { Construct } from 'constructs';

export interface ConstructProps {}

export class Component extends Construct {
  constructor(scope: Construct, id: string, _props: ConstructProps = {}) {
    super(scope, id);
  }
}
"#,
        ))
        .with_file(TemplateFile::new(".gitignore", CDK_GITIGNORE))
        .with_file(TemplateFile::new(
            "README.md",
            "# __PROJECT_NAME__\n\nReusable CDK construct library owned by __ORG__.\n",
        ))
}

// ── Mobile ────────────────────────────────────────────────────────────────────

fn mobile_overlay(variant: SkeletonVariant, ignored: &[&str]) -> SkeletonLayout {
    let mut bazelignore = ignored.join("\n");
    bazelignore.push('\n');
    SkeletonLayout::new(variant).with_file(TemplateFile::new(".bazelignore", bazelignore))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_valid_layout() {
        for variant in SkeletonVariant::ALL {
            let layout = layout(variant);
            assert_eq!(layout.variant, variant);
            layout.validate().unwrap();
        }
    }

    #[test]
    fn kotlin_main_matches_build_stub_main_class() {
        let layout = layout(SkeletonVariant::Kotlin);
        assert!(layout.files.iter().any(|f| f.path == "src/main/kotlin/Main.kt"));
    }

    #[test]
    fn cdk_app_paths_are_parameterised() {
        let layout = layout(SkeletonVariant::CdkApp);
        assert!(layout
            .files
            .iter()
            .any(|f| f.path == "bin/__PROJECT_NAME__.ts"));
    }

    #[test]
    fn mobile_overlay_does_not_collide_with_generator_output() {
        for variant in [SkeletonVariant::Expo, SkeletonVariant::Bare] {
            let paths: Vec<_> = layout(variant).files.into_iter().map(|f| f.path).collect();
            assert_eq!(paths, vec![".bazelignore".to_string()]);
        }
    }
}
