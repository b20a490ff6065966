pub const DEFAULT_TEMPLATE_ZH: &str = "## {{dateWithIcon}}（{{weekday}}）

### 🧘 今日计划
---

- [ ] 冥想 10 分钟
- [ ] 复盘前一日计划
- [ ] 阅读 20 页书

### 📝 工作任务
---

- [ ] 整理今日工作计划
- [ ] 完成重要项目进度
";

pub const DEFAULT_TEMPLATE_EN: &str = "## {{dateWithIcon}} ({{weekday}})

### 🧘 Today's Plan
---

- [ ] Meditate for 10 minutes
- [ ] Review yesterday's plan
- [ ] Read 20 pages

### 📝 Work Tasks
---

- [ ] Organize today's work schedule
- [ ] Progress on important projects
";
