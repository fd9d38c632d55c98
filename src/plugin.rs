//! プラグイン本体
//!
//! ホストから `activate` / `deactivate` とエディタビューのライフサイクル通知を受け、
//! `Reporter` と各ビューの `LineInspector` を束ねる。
//! ホストへの登録はすべて `Subscription` として保持し、`deactivate`
//! （またはプラグインのドロップ）で明示的に解除する。

use crate::config::Settings;
use crate::editor::{EditorView, LineInspector, ViewId, ViewUpdate};
use crate::error::{PluginError, Result};
use crate::host::{Host, Leaf, Subscription, WorkspaceEvent};
use crate::logging;
use crate::reporter::Reporter;
use std::collections::HashMap;

/// プラグイン名
pub const PLUGIN_NAME: &str = "Current Line Character Count";

/// 現在行の文字数をステータスバーに表示するプラグイン
pub struct CurrentLineCharCount {
    settings: Settings,
    reporter: Option<Reporter>,
    inspectors: HashMap<ViewId, LineInspector>,
    subscriptions: Vec<Subscription>,
}

impl CurrentLineCharCount {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            reporter: None,
            inspectors: HashMap::new(),
            subscriptions: Vec::new(),
        }
    }

    /// プラグインを有効化する
    ///
    /// ラベルを確保して N/A を表示し、エディタ拡張とアクティブリーフの
    /// 変更イベントを登録してから、現在のアクティブリーフで初期表示を行う。
    /// ホストがロガーを登録していなければ設定のログレベルで stderr ロガーを使う。
    pub fn activate(&mut self, host: &mut dyn Host) -> Result<()> {
        if self.is_active() {
            return Err(PluginError::AlreadyActive);
        }
        logging::init(self.settings.log_level);
        log::info!("Loading {} plugin", PLUGIN_NAME);

        let mut reporter = Reporter::new(host.add_status_bar_item(), self.settings.clone());
        reporter.update_status_bar(None);

        self.subscriptions.push(host.register_editor_extension());
        self.subscriptions
            .push(host.register_event(WorkspaceEvent::ActiveLeafChange));

        reporter.on_active_leaf_change(host.active_leaf().as_ref());
        self.reporter = Some(reporter);
        Ok(())
    }

    /// プラグインを無効化する
    ///
    /// 監視中のビューを破棄し、登録を逆順に解除してラベルを手放す。
    pub fn deactivate(&mut self) -> Result<()> {
        if !self.is_active() {
            return Err(PluginError::NotActive);
        }
        log::info!("Unloading {} plugin", PLUGIN_NAME);

        self.inspectors.clear();
        while let Some(subscription) = self.subscriptions.pop() {
            subscription.release();
        }
        self.reporter = None;
        Ok(())
    }

    /// エディタビューが生成された
    ///
    /// 同じ ID が既にあれば作り直す。
    pub fn view_created(&mut self, id: ViewId, view: &dyn EditorView) -> Result<()> {
        let unit = self.settings.count_unit;
        let reporter = self.reporter.as_mut().ok_or(PluginError::NotActive)?;
        let inspector = LineInspector::new(view, reporter, unit);
        self.inspectors.insert(id, inspector);
        log::debug!(target: "line_char_count", "{} attached", id);
        Ok(())
    }

    /// エディタビューが更新された
    pub fn view_updated(&mut self, id: ViewId, update: &ViewUpdate<'_>) -> Result<()> {
        let reporter = self.reporter.as_mut().ok_or(PluginError::NotActive)?;
        let inspector = self
            .inspectors
            .get_mut(&id)
            .ok_or(PluginError::UnknownView(id))?;
        inspector.update(update, reporter);
        Ok(())
    }

    /// エディタビューが破棄された
    pub fn view_destroyed(&mut self, id: ViewId) -> Result<()> {
        if !self.is_active() {
            return Err(PluginError::NotActive);
        }
        if self.inspectors.remove(&id).is_none() {
            return Err(PluginError::UnknownView(id));
        }
        log::debug!(target: "line_char_count", "{} detached", id);
        Ok(())
    }

    /// アクティブなリーフが切り替わった
    pub fn active_leaf_changed(&mut self, leaf: Option<&Leaf>) -> Result<()> {
        let reporter = self.reporter.as_mut().ok_or(PluginError::NotActive)?;
        reporter.on_active_leaf_change(leaf);
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.reporter.is_some()
    }

    /// 監視中のビュー数
    pub fn view_count(&self) -> usize {
        self.inspectors.len()
    }

    pub fn reporter(&self) -> Option<&Reporter> {
        self.reporter.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Default for CurrentLineCharCount {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
