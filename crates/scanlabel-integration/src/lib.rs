//! # 会话仓库集成模块
//!
//! 提供会话来源与会话修改能力的实现：
//! - 内存仓库：保持存储顺序，支持注入故障，供测试和演练使用
//! - JSON目录：从磁盘加载会话目录，运行结束后写回

pub mod catalog;
pub mod memory;

pub use catalog::JsonCatalog;
pub use memory::MemoryRepository;
