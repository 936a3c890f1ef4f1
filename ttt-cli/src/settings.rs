//! 设置模块
//!
//! 提供设置数据结构与 JSON 持久化

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use ttt_core::{Difficulty, Mark};

/// 对局设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// AI 难度
    pub difficulty: Difficulty,
    /// 人类执子（X 永远先手）
    pub human_mark: Mark,
    /// AI 随机种子（None 表示每次随机）
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            human_mark: Mark::X,
            seed: None,
        }
    }
}

impl Settings {
    /// 获取默认设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// AI 执子
    pub fn ai_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// 加载设置：指定路径优先，否则使用默认路径
    pub fn load(custom: Option<&Path>) -> Self {
        match custom.map(Path::to_path_buf).or_else(Self::settings_path) {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("无法获取配置目录，使用默认设置");
                Self::default()
            }
        }
    }

    /// 从文件加载设置，文件缺失或无效时回退到默认设置
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("设置文件不存在，使用默认设置");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("已加载设置: {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("设置文件格式无效: {}，使用默认设置", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("无法读取设置文件: {}，使用默认设置", e);
                Self::default()
            }
        }
    }

    /// 保存设置，返回实际写入的路径
    pub fn save(&self, custom: Option<&Path>) -> Result<PathBuf> {
        let path = custom
            .map(Path::to_path_buf)
            .or_else(Self::settings_path)
            .context("无法获取配置目录")?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// 保存设置到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        fs::write(path, content).with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }
}
