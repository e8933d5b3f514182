//! editor-bridge - keeps a live editor widget in step with an external,
//! immutably updated store.
//!
//! 模块结构：
//! - kernel: reconciliation core (StateBridge and its syncs)
//! - kernel::services: collaborator ports + adapters
//! - replay: scripted sessions against the recording widget

pub mod kernel;
pub mod replay;
