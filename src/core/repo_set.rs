//! 仓库集合比较：远程有、本地没有的名称

use std::collections::HashSet;

/// 计算 `remote - local`，按区分大小写的字节序排序
///
/// 远程列表中的重复名称不去重：出现两次就输出两次。
pub fn difference<R, L>(remote: &[R], local: &[L]) -> Vec<String>
where
    R: AsRef<str>,
    L: AsRef<str>,
{
    let local: HashSet<&str> = local.iter().map(AsRef::as_ref).collect();
    let mut missing: Vec<String> = remote
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !local.contains(name))
        .map(str::to_string)
        .collect();
    missing.sort();
    missing
}
