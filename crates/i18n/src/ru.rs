use super::Translation;

/// Russian translation
pub struct Russian;

impl Translation for Russian {
    // Worktree panel
    fn worktrees_title(&self) -> &str {
        "Рабочие деревья"
    }

    fn worktree_detail_title(&self) -> &str {
        "Рабочее дерево"
    }

    fn no_worktrees(&self) -> &str {
        "Нет рабочих деревьев"
    }

    fn worktree_path_label(&self) -> &str {
        "Путь"
    }

    fn worktree_main_marker(&self) -> &str {
        "(основное)"
    }

    fn worktree_current_marker(&self) -> &str {
        "(текущее)"
    }

    // Binding descriptions
    fn enter_worktree(&self) -> &str {
        "Перейти в рабочее дерево"
    }

    fn delete_worktree(&self) -> &str {
        "Удалить рабочее дерево"
    }

    fn return_to_previous(&self) -> &str {
        "Назад"
    }

    fn quit(&self) -> &str {
        "Выход"
    }

    // Delete flow
    fn delete_worktree_title(&self) -> &str {
        "Удаление рабочего дерева"
    }

    fn delete_worktree_prompt(&self) -> &str {
        "Удалить рабочее дерево '{{worktreeName}}'?"
    }

    fn force_delete_worktree_prompt(&self) -> &str {
        "'{{worktreeName}}' содержит изменённые или неотслеживаемые файлы,\nлибо заблокировано. Удалить принудительно?"
    }

    fn cant_delete_main_worktree(&self) -> &str {
        "Нельзя удалить основное рабочее дерево"
    }

    fn cant_delete_current_worktree(&self) -> &str {
        "Нельзя удалить текущее рабочее дерево"
    }

    // Command log
    fn action_delete_worktree(&self) -> &str {
        "Удаление рабочего дерева"
    }

    // Errors
    fn error_title(&self) -> &str {
        "Ошибка"
    }

    fn git_not_found(&self) -> &str {
        "git не найден в PATH"
    }

    fn not_a_repository(&self, path: &str) -> String {
        format!("Не является git-репозиторием: {}", path)
    }

    // UI elements
    fn ui_yes(&self) -> &str {
        "Да"
    }

    fn ui_no(&self) -> &str {
        "Нет"
    }

    fn ui_ok(&self) -> &str {
        "ОК"
    }
}
